use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A reservation of one listing for a date range.
///
/// The booking flow performs no overlap detection: two bookings for the same
/// listing over intersecting dates are both accepted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub listing_id: i32,
    /// Opaque identifier of the guest, issued by the auth service.
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBooking {
    pub listing_id: i32,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}
