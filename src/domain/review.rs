use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Rating, TypeConstraintError};

/// A guest review left on a listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: i32,
    pub listing_id: i32,
    /// Opaque identifier of the author, issued by the auth service.
    pub user_id: String,
    pub rating: Rating,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewReview {
    pub listing_id: i32,
    pub user_id: String,
    pub rating: Rating,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

impl NewReview {
    /// Builds a review, sanitizing the comment of any markup and rejecting
    /// comments that are empty once sanitized.
    pub fn new(
        listing_id: i32,
        user_id: String,
        rating: Rating,
        comment: &str,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        let comment = ammonia::clean(comment).trim().to_string();
        if comment.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            listing_id,
            user_id,
            rating,
            comment,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn new_review_strips_markup() {
        let review = NewReview::new(
            1,
            "user-1".to_string(),
            Rating::new(4).unwrap(),
            "<script>alert(1)</script>Quiet place, close to campus.",
            Utc::now().naive_utc(),
        )
        .unwrap();
        assert_eq!(review.comment, "Quiet place, close to campus.");
    }

    #[test]
    fn new_review_rejects_markup_only_comment() {
        let result = NewReview::new(
            1,
            "user-1".to_string(),
            Rating::new(4).unwrap(),
            "<script>alert(1)</script>",
            Utc::now().naive_utc(),
        );
        assert_eq!(result.unwrap_err(), TypeConstraintError::EmptyString);
    }
}
