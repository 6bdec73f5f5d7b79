//! Closed vocabularies and constrained values used by the marketplace
//! domain. Once a value of one of these types exists it can be treated as
//! trusted by the rest of the crate.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Room occupancy label. The catalog is closed: a listing is always one of
/// these four sizes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomSize {
    #[serde(rename = "1 in a room")]
    OneInARoom,
    #[serde(rename = "2 in a room")]
    TwoInARoom,
    #[serde(rename = "3 in a room")]
    ThreeInARoom,
    #[serde(rename = "4 in a room")]
    FourInARoom,
}

impl RoomSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomSize::OneInARoom => "1 in a room",
            RoomSize::TwoInARoom => "2 in a room",
            RoomSize::ThreeInARoom => "3 in a room",
            RoomSize::FourInARoom => "4 in a room",
        }
    }
}

impl Display for RoomSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for RoomSize {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "1 in a room" => Ok(RoomSize::OneInARoom),
            "2 in a room" => Ok(RoomSize::TwoInARoom),
            "3 in a room" => Ok(RoomSize::ThreeInARoom),
            "4 in a room" => Ok(RoomSize::FourInARoom),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown room size: {other}"
            ))),
        }
    }
}

/// Amenity label from the fixed catalog offered by the search form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Amenity {
    Wifi,
    Parking,
    Kitchen,
    Tv,
    AirConditioning,
}

impl Amenity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "parking",
            Amenity::Kitchen => "kitchen",
            Amenity::Tv => "tv",
            Amenity::AirConditioning => "air-conditioning",
        }
    }
}

impl Display for Amenity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Amenity {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "wifi" => Ok(Amenity::Wifi),
            "parking" => Ok(Amenity::Parking),
            "kitchen" => Ok(Amenity::Kitchen),
            "tv" => Ok(Amenity::Tv),
            "air-conditioning" => Ok(Amenity::AirConditioning),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown amenity: {other}"
            ))),
        }
    }
}

/// Review rating restricted to the 1..=5 star scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidValue(format!(
                "rating must be between 1 and 5, got {value}"
            )))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_size_round_trips_through_labels() {
        for label in ["1 in a room", "2 in a room", "3 in a room", "4 in a room"] {
            let size = RoomSize::try_from(label).unwrap();
            assert_eq!(size.as_str(), label);
        }
        assert!(RoomSize::try_from("5 in a room").is_err());
    }

    #[test]
    fn amenity_round_trips_through_labels() {
        for label in ["wifi", "parking", "kitchen", "tv", "air-conditioning"] {
            let amenity = Amenity::try_from(label).unwrap();
            assert_eq!(amenity.as_str(), label);
        }
        assert!(Amenity::try_from("pool").is_err());
    }

    #[test]
    fn rating_enforces_star_scale() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().get(), 5);
    }
}
