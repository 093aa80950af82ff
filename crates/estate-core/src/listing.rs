//! Property listings as published by the ads endpoint.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::CoreError;

/// Whether an ad offers the property for sale or for rent.
///
/// The API speaks Hebrew on the wire (`"מכירה"` / `"השכרה"`); English
/// spellings are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdKind {
    #[serde(rename = "מכירה", alias = "sale")]
    Sale,
    #[serde(rename = "השכרה", alias = "rent")]
    Rent,
}

impl std::fmt::Display for AdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdKind::Sale => write!(f, "sale"),
            AdKind::Rent => write!(f, "rent"),
        }
    }
}

impl FromStr for AdKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" | "מכירה" => Ok(AdKind::Sale),
            "rent" | "השכרה" => Ok(AdKind::Rent),
            other => Err(CoreError::UnknownAdKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Apartment,
    House,
    Penthouse,
    Studio,
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKind::Apartment => write!(f, "apartment"),
            PropertyKind::House => write!(f, "house"),
            PropertyKind::Penthouse => write!(f, "penthouse"),
            PropertyKind::Studio => write!(f, "studio"),
        }
    }
}

impl FromStr for PropertyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(PropertyKind::Apartment),
            "house" => Ok(PropertyKind::House),
            "penthouse" => Ok(PropertyKind::Penthouse),
            "studio" => Ok(PropertyKind::Studio),
            other => Err(CoreError::UnknownPropertyKind(other.to_string())),
        }
    }
}

/// A named boolean amenity of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Parking,
    Balcony,
    Garden,
    PetsAllowed,
    Elevator,
    Accessibility,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Parking,
        Feature::Balcony,
        Feature::Garden,
        Feature::PetsAllowed,
        Feature::Elevator,
        Feature::Accessibility,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Parking => "parking",
            Feature::Balcony => "balcony",
            Feature::Garden => "garden",
            Feature::PetsAllowed => "pets_allowed",
            Feature::Elevator => "elevator",
            Feature::Accessibility => "accessibility",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = CoreError;

    /// Accepts both the bare name (`"parking"`) and the ad column name
    /// (`"has_parking"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("has_").unwrap_or(s);
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str() == bare)
            .ok_or_else(|| CoreError::UnknownFeature(s.to_string()))
    }
}

/// The boolean feature flags of one listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    pub parking: bool,
    pub balcony: bool,
    pub garden: bool,
    pub pets_allowed: bool,
    pub elevator: bool,
    pub accessibility: bool,
}

impl Features {
    #[must_use]
    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::Parking => self.parking,
            Feature::Balcony => self.balcony,
            Feature::Garden => self.garden,
            Feature::PetsAllowed => self.pets_allowed,
            Feature::Elevator => self.elevator,
            Feature::Accessibility => self.accessibility,
        }
    }

    /// Features that are set, in [`Feature::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.has(*f))
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut features = Features::default();
        for feature in iter {
            match feature {
                Feature::Parking => features.parking = true,
                Feature::Balcony => features.balcony = true,
                Feature::Garden => features.garden = true,
                Feature::PetsAllowed => features.pets_allowed = true,
                Feature::Elevator => features.elevator = true,
                Feature::Accessibility => features.accessibility = true,
            }
        }
        features
    }
}

/// A published property ad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub ad_kind: AdKind,
    pub property_kind: PropertyKind,
    pub location: Coordinate,
    pub address: String,
    /// Half rooms are common, e.g. `3.5`.
    pub rooms: f64,
    /// Floor area in square metres.
    pub size: i64,
    pub price: i64,
    pub floor: Option<i64>,
    pub features: Features,
    pub publisher_name: String,
    pub contact_phone: String,
    pub description: Option<String>,
    pub publish_date: NaiveDate,
    /// Personalized match score; only present for users with saved preferences.
    pub score: Option<i64>,
    /// Star rating derived from `score`, 0.0 to 5.0.
    pub stars: Option<f64>,
}
