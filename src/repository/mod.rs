use crate::{
    db::{DbConnection, DbPool},
    domain::{
        booking::{Booking, NewBooking},
        listing::{Listing, ListingSummary, NewListing, UpdateListing},
        review::{NewReview, Review},
    },
    repository::errors::RepositoryResult,
};

pub mod booking;
pub mod errors;
pub mod listing;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod review;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Typed, partially-specified search criteria for listings. Every absent
/// field means "no constraint".
///
/// `room_size` and `amenities` are carried verbatim: a label outside the
/// catalog simply matches nothing, which is accepted behavior rather than an
/// error.
#[derive(Debug, Clone, Default)]
pub struct ListingSearchQuery {
    /// Substring hint matched against the listing location,
    /// case-insensitively.
    pub location: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    pub room_size: Option<String>,
    /// Superset match: a listing qualifies only if it offers every requested
    /// amenity.
    pub amenities: Vec<String>,
    pub pagination: Option<Pagination>,
}

impl ListingSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn room_size(mut self, room_size: impl Into<String>) -> Self {
        self.room_size = Some(room_size.into());
        self
    }

    pub fn amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ListingReader {
    fn get_listing_by_id(&self, id: i32) -> RepositoryResult<Option<Listing>>;
    /// Returns the total number of listings matching the query and the
    /// requested page of them, newest first.
    fn search_listings(&self, query: ListingSearchQuery)
    -> RepositoryResult<(usize, Vec<Listing>)>;
    /// Admin table projection of every listing, newest first.
    fn list_listing_summaries(&self) -> RepositoryResult<Vec<ListingSummary>>;
}

pub trait ListingWriter {
    fn create_listing(&self, new_listing: &NewListing) -> RepositoryResult<Listing>;
    fn update_listing(&self, listing_id: i32, updates: &UpdateListing)
    -> RepositoryResult<Listing>;
    fn delete_listing(&self, listing_id: i32) -> RepositoryResult<()>;
}

pub trait BookingReader {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>>;
    /// Bookings made by the given user, newest first, with the listing
    /// summary for display.
    fn list_bookings_for_user(
        &self,
        user_id: &str,
    ) -> RepositoryResult<Vec<(Booking, ListingSummary)>>;
}

pub trait BookingWriter {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
    fn delete_booking(&self, booking_id: i32) -> RepositoryResult<()>;
}

pub trait ReviewReader {
    /// Reviews left on the given listing, newest first.
    fn list_reviews(&self, listing_id: i32) -> RepositoryResult<Vec<Review>>;
}

pub trait ReviewWriter {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
