//! Repository implementation for bookings.

use diesel::prelude::*;

use crate::{
    domain::{
        booking::{Booking, NewBooking},
        listing::ListingSummary,
    },
    models::booking::{Booking as DbBooking, NewBooking as DbNewBooking},
    repository::{
        BookingReader, BookingWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl BookingReader for DieselRepository {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<Booking>> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let booking = bookings::table
            .find(id)
            .first::<DbBooking>(&mut conn)
            .optional()?;

        Ok(booking.map(Into::into))
    }

    fn list_bookings_for_user(
        &self,
        user_id: &str,
    ) -> RepositoryResult<Vec<(Booking, ListingSummary)>> {
        use crate::schema::{bookings, listings};

        let mut conn = self.conn()?;
        let rows = bookings::table
            .inner_join(listings::table)
            .filter(bookings::user_id.eq(user_id))
            .order(bookings::created_at.desc())
            .then_order_by(bookings::id.desc())
            .select((
                bookings::all_columns,
                (
                    listings::id,
                    listings::title,
                    listings::location,
                    listings::price,
                ),
            ))
            .load::<(DbBooking, (i32, String, String, f64))>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(booking, summary)| (booking.into(), summary.into()))
            .collect())
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let db_new: DbNewBooking = new_booking.into();

        let booking = diesel::insert_into(bookings::table)
            .values(&db_new)
            .get_result::<DbBooking>(&mut conn)?;

        Ok(booking.into())
    }

    fn delete_booking(&self, booking_id: i32) -> RepositoryResult<()> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(bookings::table.find(booking_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
