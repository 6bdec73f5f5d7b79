//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::listing::{Listing, ListingSummary, NewListing, UpdateListing};
use crate::domain::review::{NewReview, Review};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BookingReader, BookingWriter, ListingReader, ListingSearchQuery, ListingWriter, ReviewReader,
    ReviewWriter,
};

mock! {
    pub Repository {}

    impl ListingReader for Repository {
        fn get_listing_by_id(&self, id: i32) -> RepositoryResult<Option<Listing>>;
        fn search_listings(
            &self,
            query: ListingSearchQuery,
        ) -> RepositoryResult<(usize, Vec<Listing>)>;
        fn list_listing_summaries(&self) -> RepositoryResult<Vec<ListingSummary>>;
    }

    impl ListingWriter for Repository {
        fn create_listing(&self, new_listing: &NewListing) -> RepositoryResult<Listing>;
        fn update_listing(
            &self,
            listing_id: i32,
            updates: &UpdateListing,
        ) -> RepositoryResult<Listing>;
        fn delete_listing(&self, listing_id: i32) -> RepositoryResult<()>;
    }

    impl BookingReader for Repository {
        fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
        fn list_bookings_for_user(
            &self,
            user_id: &str,
        ) -> RepositoryResult<Vec<(Booking, ListingSummary)>>;
    }

    impl BookingWriter for Repository {
        fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
        fn delete_booking(&self, booking_id: i32) -> RepositoryResult<()>;
    }

    impl ReviewReader for Repository {
        fn list_reviews(&self, listing_id: i32) -> RepositoryResult<Vec<Review>>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    }
}
