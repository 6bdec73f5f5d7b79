use chrono::Utc;
use validator::Validate;

use crate::domain::review::{NewReview, Review};
use crate::domain::types::Rating;
use crate::forms::review::ReviewForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ListingReader, ReviewWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the review form and records a review on the listing.
pub fn add_review<R>(
    repo: &R,
    user: &AuthenticatedUser,
    listing_id: i32,
    form: ReviewForm,
) -> ServiceResult<Review>
where
    R: ListingReader + ReviewWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate review form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.get_listing_by_id(listing_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let new_review = NewReview::new(
        listing_id,
        user.sub.clone(),
        Rating::new(form.rating)?,
        &form.comment,
        Utc::now().naive_utc(),
    )?;

    repo.create_review(&new_review).map_err(|err| {
        log::error!("Failed to create review: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "guest-1".to_string(),
            email: "guest@example.com".to_string(),
            name: "Guest".to_string(),
            roles: vec![],
            exp: (Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[test]
    fn short_comment_is_a_form_error() {
        let repo = MockRepository::new();
        let form = ReviewForm {
            rating: 5,
            comment: "nice".to_string(),
        };
        let result = add_review(&repo, &user(), 1, form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn review_on_unknown_listing_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_listing_by_id().returning(|_| Ok(None));

        let form = ReviewForm {
            rating: 4,
            comment: "Quiet place, close to campus.".to_string(),
        };
        let result = add_review(&repo, &user(), 404, form);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
