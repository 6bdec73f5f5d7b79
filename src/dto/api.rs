//! Payloads exposed by the admin listings API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// JSON body accepted by the create and update listing endpoints.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ListingPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// One of the closed room-size labels.
    #[serde(rename = "roomSize")]
    pub room_size: String,
    /// Amenity labels from the fixed catalog.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Ordered image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Body returned by delete-style endpoints.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}
