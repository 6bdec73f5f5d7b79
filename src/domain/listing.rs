use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Amenity, RoomSize};

/// A rentable accommodation record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Non-negative, currency-agnostic unit.
    pub price: f64,
    pub room_size: RoomSize,
    /// Sorted and de-duplicated.
    pub amenities: Vec<Amenity>,
    /// Ordered image URLs; the template falls back to a placeholder when
    /// empty.
    pub images: Vec<String>,
    /// Opaque owner identifier issued by the auth service.
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Projection of a listing used by the admin table view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListingSummary {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub price: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub room_size: RoomSize,
    pub amenities: Vec<Amenity>,
    pub images: Vec<String>,
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

impl NewListing {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        location: String,
        price: f64,
        room_size: RoomSize,
        amenities: Vec<Amenity>,
        images: Vec<String>,
        user_id: String,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description,
            location: location.trim().to_string(),
            price,
            room_size,
            amenities: dedup_amenities(amenities),
            images,
            user_id,
            created_at,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub room_size: RoomSize,
    pub amenities: Vec<Amenity>,
    pub images: Vec<String>,
}

impl UpdateListing {
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        location: String,
        price: f64,
        room_size: RoomSize,
        amenities: Vec<Amenity>,
        images: Vec<String>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description,
            location: location.trim().to_string(),
            price,
            room_size,
            amenities: dedup_amenities(amenities),
            images,
        }
    }
}

fn dedup_amenities(amenities: Vec<Amenity>) -> Vec<Amenity> {
    amenities
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn new_listing_trims_and_dedups() {
        let listing = NewListing::new(
            "  Campus Lodge  ".to_string(),
            "desc".to_string(),
            " Ayeduase ".to_string(),
            350.0,
            RoomSize::TwoInARoom,
            vec![Amenity::Tv, Amenity::Wifi, Amenity::Tv],
            vec![],
            "user-1".to_string(),
            Utc::now().naive_utc(),
        );
        assert_eq!(listing.title, "Campus Lodge");
        assert_eq!(listing.location, "Ayeduase");
        assert_eq!(listing.amenities, vec![Amenity::Wifi, Amenity::Tv]);
    }
}
