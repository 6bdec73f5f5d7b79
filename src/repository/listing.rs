//! Repository implementation for accommodation listings, including the
//! filtered, paginated search used by the browse page.

use std::collections::HashMap;

use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::DbConnection,
    domain::listing::{Listing, ListingSummary, NewListing, UpdateListing},
    models::listing::{
        Listing as DbListing, ListingAmenity as DbListingAmenity, NewListing as DbNewListing,
        UpdateListing as DbUpdateListing,
    },
    repository::{
        DieselRepository, ListingReader, ListingSearchQuery, ListingWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::listings,
};

/// Builds the filtered select for `query`. Bounds omitted from the query
/// behave as unbounded; an inconsistent filter (min above max, unknown
/// labels) structurally matches nothing and is not treated as an error.
fn filtered_listings(query: &ListingSearchQuery) -> listings::BoxedQuery<'static, Sqlite> {
    use crate::schema::listing_amenities;

    let mut stmt = listings::table.into_boxed();

    if let Some(location) = &query.location {
        // SQLite LIKE is case-insensitive for ASCII, which matches the
        // substring-hint intent of the location field.
        stmt = stmt.filter(listings::location.like(format!("%{location}%")));
    }
    if let Some(min_price) = query.min_price {
        stmt = stmt.filter(listings::price.ge(min_price));
    }
    if let Some(max_price) = query.max_price {
        stmt = stmt.filter(listings::price.le(max_price));
    }
    if let Some(room_size) = &query.room_size {
        stmt = stmt.filter(listings::room_size.eq(room_size.clone()));
    }
    // Superset semantics: one correlated EXISTS per requested amenity, so a
    // listing qualifies only when it offers all of them.
    for amenity in &query.amenities {
        stmt = stmt.filter(exists(
            listing_amenities::table
                .filter(listing_amenities::listing_id.eq(listings::id))
                .filter(listing_amenities::amenity.eq(amenity.clone())),
        ));
    }

    stmt
}

/// Loads the amenity labels for the given listing ids.
fn load_amenities(
    conn: &mut DbConnection,
    ids: &[i32],
) -> QueryResult<HashMap<i32, Vec<String>>> {
    use crate::schema::listing_amenities;

    let rows = listing_amenities::table
        .filter(listing_amenities::listing_id.eq_any(ids))
        .order(listing_amenities::amenity.asc())
        .load::<DbListingAmenity>(conn)?;

    let mut by_listing: HashMap<i32, Vec<String>> = HashMap::new();
    for row in rows {
        by_listing.entry(row.listing_id).or_default().push(row.amenity);
    }
    Ok(by_listing)
}

fn to_domain(db_listing: DbListing, amenities: Vec<String>) -> RepositoryResult<Listing> {
    Listing::try_from((db_listing, amenities))
        .map_err(|e| RepositoryError::ValidationError(e.to_string()))
}

impl ListingReader for DieselRepository {
    fn get_listing_by_id(&self, id: i32) -> RepositoryResult<Option<Listing>> {
        let mut conn = self.conn()?;

        let db_listing = listings::table
            .find(id)
            .first::<DbListing>(&mut conn)
            .optional()?;

        match db_listing {
            Some(db_listing) => {
                let mut amenities = load_amenities(&mut conn, &[db_listing.id])?;
                let amenities = amenities.remove(&db_listing.id).unwrap_or_default();
                Ok(Some(to_domain(db_listing, amenities)?))
            }
            None => Ok(None),
        }
    }

    fn search_listings(
        &self,
        query: ListingSearchQuery,
    ) -> RepositoryResult<(usize, Vec<Listing>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered_listings(&query).count().get_result(&mut conn)?;

        // The id tiebreak keeps the order total, so identical requests
        // return identically ordered pages.
        let mut stmt = filtered_listings(&query)
            .order(listings::created_at.desc())
            .then_order_by(listings::id.desc());

        if let Some(pagination) = &query.pagination {
            let page = if pagination.page == 0 {
                1
            } else {
                pagination.page
            } as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }

        let db_listings = stmt.load::<DbListing>(&mut conn)?;

        let ids: Vec<i32> = db_listings.iter().map(|l| l.id).collect();
        let mut amenities = load_amenities(&mut conn, &ids)?;

        let items = db_listings
            .into_iter()
            .map(|db_listing| {
                let listing_amenities = amenities.remove(&db_listing.id).unwrap_or_default();
                to_domain(db_listing, listing_amenities)
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, items))
    }

    fn list_listing_summaries(&self) -> RepositoryResult<Vec<ListingSummary>> {
        let mut conn = self.conn()?;

        let rows = listings::table
            .select((
                listings::id,
                listings::title,
                listings::location,
                listings::price,
            ))
            .order(listings::created_at.desc())
            .then_order_by(listings::id.desc())
            .load::<(i32, String, String, f64)>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ListingWriter for DieselRepository {
    fn create_listing(&self, new_listing: &NewListing) -> RepositoryResult<Listing> {
        use crate::schema::listing_amenities;

        let mut conn = self.conn()?;
        let db_new: DbNewListing = new_listing.into();

        let db_listing = conn.transaction::<DbListing, diesel::result::Error, _>(|conn| {
            let db_listing = diesel::insert_into(listings::table)
                .values(&db_new)
                .get_result::<DbListing>(conn)?;

            let amenity_rows: Vec<DbListingAmenity> = new_listing
                .amenities
                .iter()
                .map(|a| DbListingAmenity {
                    listing_id: db_listing.id,
                    amenity: a.to_string(),
                })
                .collect();
            diesel::insert_into(listing_amenities::table)
                .values(&amenity_rows)
                .execute(conn)?;

            Ok(db_listing)
        })?;

        let amenities = new_listing.amenities.iter().map(|a| a.to_string()).collect();
        to_domain(db_listing, amenities)
    }

    fn update_listing(
        &self,
        listing_id: i32,
        updates: &UpdateListing,
    ) -> RepositoryResult<Listing> {
        use crate::schema::listing_amenities;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateListing::from_domain(updates, Utc::now().naive_utc());

        let db_listing = conn.transaction::<DbListing, diesel::result::Error, _>(|conn| {
            let db_listing = diesel::update(listings::table.find(listing_id))
                .set(&db_updates)
                .get_result::<DbListing>(conn)?;

            diesel::delete(
                listing_amenities::table.filter(listing_amenities::listing_id.eq(listing_id)),
            )
            .execute(conn)?;

            let amenity_rows: Vec<DbListingAmenity> = updates
                .amenities
                .iter()
                .map(|a| DbListingAmenity {
                    listing_id,
                    amenity: a.to_string(),
                })
                .collect();
            diesel::insert_into(listing_amenities::table)
                .values(&amenity_rows)
                .execute(conn)?;

            Ok(db_listing)
        })?;

        let amenities = updates.amenities.iter().map(|a| a.to_string()).collect();
        to_domain(db_listing, amenities)
    }

    fn delete_listing(&self, listing_id: i32) -> RepositoryResult<()> {
        use crate::schema::{bookings, listing_amenities, reviews};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(reviews::table.filter(reviews::listing_id.eq(listing_id)))
                .execute(conn)?;
            diesel::delete(bookings::table.filter(bookings::listing_id.eq(listing_id)))
                .execute(conn)?;
            diesel::delete(
                listing_amenities::table.filter(listing_amenities::listing_id.eq(listing_id)),
            )
            .execute(conn)?;
            diesel::delete(listings::table.find(listing_id)).execute(conn)
        })?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
