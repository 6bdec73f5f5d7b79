use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::booking::{Booking as DomainBooking, NewBooking as DomainNewBooking};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::bookings)]
/// Diesel model for [`crate::domain::booking::Booking`].
pub struct Booking {
    pub id: i32,
    pub listing_id: i32,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
/// Insertable form of [`Booking`].
pub struct NewBooking<'a> {
    pub listing_id: i32,
    pub user_id: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<Booking> for DomainBooking {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            listing_id: booking.listing_id,
            user_id: booking.user_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            created_at: booking.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewBooking> for NewBooking<'a> {
    fn from(booking: &'a DomainNewBooking) -> Self {
        Self {
            listing_id: booking.listing_id,
            user_id: booking.user_id.as_str(),
            start_date: booking.start_date,
            end_date: booking.end_date,
            created_at: booking.created_at,
        }
    }
}
