use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{Review as DomainReview, NewReview as DomainNewReview};
use crate::domain::types::{Rating, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::reviews)]
/// Diesel model for [`crate::domain::review::Review`].
pub struct Review {
    pub id: i32,
    pub listing_id: i32,
    pub user_id: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
/// Insertable form of [`Review`].
pub struct NewReview<'a> {
    pub listing_id: i32,
    pub user_id: &'a str,
    pub rating: i32,
    pub comment: &'a str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            id: review.id,
            listing_id: review.listing_id,
            user_id: review.user_id,
            rating: Rating::new(review.rating)?,
            comment: review.comment,
            created_at: review.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(review: &'a DomainNewReview) -> Self {
        Self {
            listing_id: review.listing_id,
            user_id: review.user_id.as_str(),
            rating: review.rating.get(),
            comment: review.comment.as_str(),
            created_at: review.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn db_review_into_domain() {
        let review = Review {
            id: 1,
            listing_id: 2,
            user_id: "user-1".to_string(),
            rating: 4,
            comment: "Quiet and clean.".to_string(),
            created_at: Utc::now().naive_utc(),
        };
        let domain = DomainReview::try_from(review).unwrap();
        assert_eq!(domain.rating.get(), 4);
    }

    #[test]
    fn out_of_scale_db_rating_is_rejected() {
        let review = Review {
            id: 1,
            listing_id: 2,
            user_id: "user-1".to_string(),
            rating: 9,
            comment: "corrupt".to_string(),
            created_at: Utc::now().naive_utc(),
        };
        assert!(DomainReview::try_from(review).is_err());
    }
}
