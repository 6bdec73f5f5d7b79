use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::listing::{
    Listing as DomainListing, ListingSummary, NewListing as DomainNewListing,
    UpdateListing as DomainUpdateListing,
};
use crate::domain::types::{Amenity, RoomSize, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::listings)]
/// Diesel model for [`crate::domain::listing::Listing`]. Amenities live in
/// their own table; images are stored as a JSON array of URLs.
pub struct Listing {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub room_size: String,
    pub images: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Insertable, Associations)]
#[diesel(table_name = crate::schema::listing_amenities)]
#[diesel(belongs_to(Listing, foreign_key = listing_id))]
#[diesel(primary_key(listing_id, amenity))]
pub struct ListingAmenity {
    pub listing_id: i32,
    pub amenity: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::listings)]
/// Insertable form of [`Listing`].
pub struct NewListing<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub price: f64,
    pub room_size: &'a str,
    pub images: String,
    pub user_id: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::listings)]
/// Data used when updating a [`Listing`] record.
pub struct UpdateListing<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub price: f64,
    pub room_size: &'a str,
    pub images: String,
    pub updated_at: NaiveDateTime,
}

fn images_to_json(images: &[String]) -> String {
    serde_json::to_string(images).unwrap_or_else(|_| "[]".to_string())
}

impl TryFrom<(Listing, Vec<String>)> for DomainListing {
    type Error = TypeConstraintError;

    fn try_from((listing, amenities): (Listing, Vec<String>)) -> Result<Self, Self::Error> {
        let amenities = amenities
            .iter()
            .map(|a| Amenity::try_from(a.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            location: listing.location,
            price: listing.price,
            room_size: RoomSize::try_from(listing.room_size.as_str())?,
            amenities,
            images: serde_json::from_str(&listing.images).unwrap_or_default(),
            user_id: listing.user_id,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        })
    }
}

impl From<(i32, String, String, f64)> for ListingSummary {
    fn from((id, title, location, price): (i32, String, String, f64)) -> Self {
        Self {
            id,
            title,
            location,
            price,
        }
    }
}

impl<'a> From<&'a DomainNewListing> for NewListing<'a> {
    fn from(listing: &'a DomainNewListing) -> Self {
        Self {
            title: listing.title.as_str(),
            description: listing.description.as_str(),
            location: listing.location.as_str(),
            price: listing.price,
            room_size: listing.room_size.as_str(),
            images: images_to_json(&listing.images),
            user_id: listing.user_id.as_str(),
            created_at: listing.created_at,
            updated_at: listing.created_at,
        }
    }
}

impl<'a> UpdateListing<'a> {
    /// Builds the changeset for `updates`, stamping `updated_at`.
    pub fn from_domain(updates: &'a DomainUpdateListing, updated_at: NaiveDateTime) -> Self {
        Self {
            title: updates.title.as_str(),
            description: updates.description.as_str(),
            location: updates.location.as_str(),
            price: updates.price,
            room_size: updates.room_size.as_str(),
            images: images_to_json(&updates.images),
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_db_listing() -> Listing {
        let now = Utc::now().naive_utc();
        Listing {
            id: 1,
            title: "Campus Lodge".to_string(),
            description: "Close to the main gate".to_string(),
            location: "Ayeduase".to_string(),
            price: 350.0,
            room_size: "2 in a room".to_string(),
            images: r#"["https://img.example/1.jpg"]"#.to_string(),
            user_id: "user-1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn db_listing_into_domain() {
        let domain =
            DomainListing::try_from((sample_db_listing(), vec!["wifi".to_string()])).unwrap();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.room_size, RoomSize::TwoInARoom);
        assert_eq!(domain.amenities, vec![Amenity::Wifi]);
        assert_eq!(domain.images, vec!["https://img.example/1.jpg"]);
    }

    #[test]
    fn db_listing_with_unknown_amenity_is_rejected() {
        let result = DomainListing::try_from((sample_db_listing(), vec!["jacuzzi".to_string()]));
        assert!(result.is_err());
    }

    #[test]
    fn from_domain_new_serializes_images() {
        let domain = DomainNewListing::new(
            "Campus Lodge".to_string(),
            "desc".to_string(),
            "Ayeduase".to_string(),
            350.0,
            RoomSize::TwoInARoom,
            vec![Amenity::Wifi],
            vec!["https://img.example/1.jpg".to_string()],
            "user-1".to_string(),
            Utc::now().naive_utc(),
        );
        let new: NewListing = (&domain).into();
        assert_eq!(new.images, r#"["https://img.example/1.jpg"]"#);
        assert_eq!(new.room_size, "2 in a room");
        assert_eq!(new.updated_at, new.created_at);
    }
}
