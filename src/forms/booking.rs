use chrono::NaiveDate;
use serde::Deserialize;

/// Form data for booking a listing over a date range.
///
/// No overlap or date-order validation is applied; an already-booked range
/// is accepted.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
