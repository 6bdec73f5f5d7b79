use chrono::Utc;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::listing::ListingSummary;
use crate::forms::booking::BookingForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{BookingReader, BookingWriter, ListingReader};
use crate::services::{ServiceError, ServiceResult};

/// Books the listing for the authenticated user. Overlapping bookings are
/// accepted; no conflict detection exists in this flow.
pub fn create_booking<R>(
    repo: &R,
    user: &AuthenticatedUser,
    listing_id: i32,
    form: BookingForm,
) -> ServiceResult<Booking>
where
    R: ListingReader + BookingWriter + ?Sized,
{
    repo.get_listing_by_id(listing_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let new_booking = NewBooking {
        listing_id,
        user_id: user.sub.clone(),
        start_date: form.start_date,
        end_date: form.end_date,
        created_at: Utc::now().naive_utc(),
    };

    repo.create_booking(&new_booking).map_err(|err| {
        log::error!("Failed to create booking: {err}");
        ServiceError::from(err)
    })
}

/// Lists the authenticated user's bookings, newest first.
pub fn list_my_bookings<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<Vec<(Booking, ListingSummary)>>
where
    R: BookingReader + ?Sized,
{
    repo.list_bookings_for_user(&user.sub)
        .map_err(ServiceError::from)
}

/// Cancels a booking. Only the user who made the booking may cancel it.
pub fn cancel_booking<R>(
    repo: &R,
    user: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<()>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    let booking = repo
        .get_booking_by_id(booking_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if booking.user_id != user.sub {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_booking(booking_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::repository::mock::MockRepository;

    fn user(sub: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: sub.to_string(),
            email: format!("{sub}@example.com"),
            name: sub.to_string(),
            roles: vec![],
            exp: (Utc::now().timestamp() + 3600) as usize,
        }
    }

    fn booking(id: i32, user_id: &str) -> Booking {
        Booking {
            id,
            listing_id: 1,
            user_id: user_id.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 20).unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn booking_unknown_listing_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_listing_by_id().returning(|_| Ok(None));

        let form = BookingForm {
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 20).unwrap(),
        };
        let result = create_booking(&repo, &user("guest-1"), 404, form);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn cancelling_someone_elses_booking_is_unauthorized() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .returning(|id| Ok(Some(booking(id, "guest-1"))));

        let result = cancel_booking(&repo, &user("guest-2"), 7);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn owner_can_cancel_booking() {
        let mut repo = MockRepository::new();
        repo.expect_get_booking_by_id()
            .returning(|id| Ok(Some(booking(id, "guest-1"))));
        repo.expect_delete_booking().returning(|_| Ok(()));

        assert!(cancel_booking(&repo, &user("guest-1"), 7).is_ok());
    }
}
