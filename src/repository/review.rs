//! Repository implementation for listing reviews.

use diesel::prelude::*;

use crate::{
    domain::review::{NewReview, Review},
    models::review::{NewReview as DbNewReview, Review as DbReview},
    repository::{
        DieselRepository, ReviewReader, ReviewWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ReviewReader for DieselRepository {
    fn list_reviews(&self, listing_id: i32) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let rows = reviews::table
            .filter(reviews::listing_id.eq(listing_id))
            .order(reviews::created_at.desc())
            .then_order_by(reviews::id.desc())
            .load::<DbReview>(&mut conn)?;

        rows.into_iter()
            .map(|row| {
                Review::try_from(row).map_err(|e| RepositoryError::ValidationError(e.to_string()))
            })
            .collect()
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_new: DbNewReview = new_review.into();

        let review = diesel::insert_into(reviews::table)
            .values(&db_new)
            .get_result::<DbReview>(&mut conn)?;

        Review::try_from(review).map_err(|e| RepositoryError::ValidationError(e.to_string()))
    }
}
