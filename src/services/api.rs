//! Admin listings API: thin CRUD guarded by the admin role.

use chrono::Utc;
use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::listing::{Listing, ListingSummary, NewListing, UpdateListing};
use crate::domain::types::{Amenity, RoomSize, TypeConstraintError};
use crate::dto::api::ListingPayload;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ListingReader, ListingWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

fn parse_amenities(labels: &[String]) -> Result<Vec<Amenity>, TypeConstraintError> {
    labels
        .iter()
        .map(|label| Amenity::try_from(label.as_str()))
        .collect()
}

fn validate_payload(payload: &ListingPayload) -> ServiceResult<(RoomSize, Vec<Amenity>)> {
    if let Err(err) = payload.validate() {
        log::error!("Failed to validate listing payload: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }
    let room_size = RoomSize::try_from(payload.room_size.as_str())?;
    let amenities = parse_amenities(&payload.amenities)?;
    Ok((room_size, amenities))
}

/// Returns the admin table projection of every listing, newest first.
pub fn list_listings<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<ListingSummary>>
where
    R: ListingReader + ?Sized,
{
    ensure_admin(user)?;
    repo.list_listing_summaries().map_err(ServiceError::from)
}

pub fn get_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    listing_id: i32,
) -> ServiceResult<Listing>
where
    R: ListingReader + ?Sized,
{
    ensure_admin(user)?;
    repo.get_listing_by_id(listing_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payload: ListingPayload,
) -> ServiceResult<Listing>
where
    R: ListingWriter + ?Sized,
{
    ensure_admin(user)?;
    let (room_size, amenities) = validate_payload(&payload)?;

    let new_listing = NewListing::new(
        payload.title,
        payload.description,
        payload.location,
        payload.price,
        room_size,
        amenities,
        payload.images,
        user.sub.clone(),
        Utc::now().naive_utc(),
    );

    repo.create_listing(&new_listing).map_err(|err| {
        log::error!("Failed to create listing: {err}");
        ServiceError::from(err)
    })
}

pub fn update_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    listing_id: i32,
    payload: ListingPayload,
) -> ServiceResult<Listing>
where
    R: ListingWriter + ?Sized,
{
    ensure_admin(user)?;
    let (room_size, amenities) = validate_payload(&payload)?;

    let updates = UpdateListing::new(
        payload.title,
        payload.description,
        payload.location,
        payload.price,
        room_size,
        amenities,
        payload.images,
    );

    repo.update_listing(listing_id, &updates).map_err(|err| {
        log::error!("Failed to update listing: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    listing_id: i32,
) -> ServiceResult<()>
where
    R: ListingWriter + ?Sized,
{
    ensure_admin(user)?;
    repo.delete_listing(listing_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "admin-1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec![SERVICE_ADMIN_ROLE.to_string()],
            exp: (Utc::now().timestamp() + 3600) as usize,
        }
    }

    fn guest() -> AuthenticatedUser {
        AuthenticatedUser {
            roles: vec![],
            ..admin()
        }
    }

    fn payload() -> ListingPayload {
        ListingPayload {
            title: "Campus Lodge".to_string(),
            description: "Close to the main gate".to_string(),
            location: "Ayeduase".to_string(),
            price: 350.0,
            room_size: "2 in a room".to_string(),
            amenities: vec!["wifi".to_string()],
            images: vec![],
        }
    }

    #[test]
    fn non_admin_cannot_list_listings() {
        let repo = MockRepository::new();
        let result = list_listings(&repo, &guest());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn unknown_amenity_is_a_validation_error() {
        let repo = MockRepository::new();
        let mut bad = payload();
        bad.amenities = vec!["jacuzzi".to_string()];
        let result = create_listing(&repo, &admin(), bad);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn negative_price_is_a_form_error() {
        let repo = MockRepository::new();
        let mut bad = payload();
        bad.price = -1.0;
        let result = create_listing(&repo, &admin(), bad);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
