//! Points of interest and the closed set of amenity categories offered as
//! map layers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    School,
    Kindergarten,
    University,
    Shelter,
    Hospital,
    Pharmacy,
    Park,
    Playground,
    Library,
    PlaceOfWorship,
    Supermarket,
    Mall,
    BusStation,
    TrainStation,
    Restaurant,
    Cafe,
    Gym,
    Bank,
    PostOffice,
    CommunityCenter,
    Daycare,
    Police,
    FireStation,
    Recycling,
}

impl PoiCategory {
    /// Every category in layer-panel order.
    pub const ALL: [PoiCategory; 24] = [
        PoiCategory::School,
        PoiCategory::Kindergarten,
        PoiCategory::University,
        PoiCategory::Shelter,
        PoiCategory::Hospital,
        PoiCategory::Pharmacy,
        PoiCategory::Park,
        PoiCategory::Playground,
        PoiCategory::Library,
        PoiCategory::PlaceOfWorship,
        PoiCategory::Supermarket,
        PoiCategory::Mall,
        PoiCategory::BusStation,
        PoiCategory::TrainStation,
        PoiCategory::Restaurant,
        PoiCategory::Cafe,
        PoiCategory::Gym,
        PoiCategory::Bank,
        PoiCategory::PostOffice,
        PoiCategory::CommunityCenter,
        PoiCategory::Daycare,
        PoiCategory::Police,
        PoiCategory::FireStation,
        PoiCategory::Recycling,
    ];

    /// Wire identifier used by the API (`amenity` / `layers` values).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PoiCategory::School => "school",
            PoiCategory::Kindergarten => "kindergarten",
            PoiCategory::University => "university",
            PoiCategory::Shelter => "shelter",
            PoiCategory::Hospital => "hospital",
            PoiCategory::Pharmacy => "pharmacy",
            PoiCategory::Park => "park",
            PoiCategory::Playground => "playground",
            PoiCategory::Library => "library",
            PoiCategory::PlaceOfWorship => "place_of_worship",
            PoiCategory::Supermarket => "supermarket",
            PoiCategory::Mall => "mall",
            PoiCategory::BusStation => "bus_station",
            PoiCategory::TrainStation => "train_station",
            PoiCategory::Restaurant => "restaurant",
            PoiCategory::Cafe => "cafe",
            PoiCategory::Gym => "gym",
            PoiCategory::Bank => "bank",
            PoiCategory::PostOffice => "post_office",
            PoiCategory::CommunityCenter => "community_center",
            PoiCategory::Daycare => "daycare",
            PoiCategory::Police => "police",
            PoiCategory::FireStation => "fire_station",
            PoiCategory::Recycling => "recycling",
        }
    }

    /// Layer-panel label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PoiCategory::School => "Schools",
            PoiCategory::Kindergarten => "Kindergartens",
            PoiCategory::University => "Colleges and universities",
            PoiCategory::Shelter => "Shelters",
            PoiCategory::Hospital => "Hospitals",
            PoiCategory::Pharmacy => "Pharmacies",
            PoiCategory::Park => "Parks",
            PoiCategory::Playground => "Playgrounds",
            PoiCategory::Library => "Libraries",
            PoiCategory::PlaceOfWorship => "Synagogues",
            PoiCategory::Supermarket => "Supermarkets",
            PoiCategory::Mall => "Malls",
            PoiCategory::BusStation => "Bus stations",
            PoiCategory::TrainStation => "Train stations",
            PoiCategory::Restaurant => "Restaurants",
            PoiCategory::Cafe => "Cafes",
            PoiCategory::Gym => "Gyms",
            PoiCategory::Bank => "Banks",
            PoiCategory::PostOffice => "Post offices",
            PoiCategory::CommunityCenter => "Community centers",
            PoiCategory::Daycare => "Daycare centers",
            PoiCategory::Police => "Police stations",
            PoiCategory::FireStation => "Fire stations",
            PoiCategory::Recycling => "Recycling centers",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            PoiCategory::School => "🏫",
            PoiCategory::Kindergarten | PoiCategory::Daycare => "👶",
            PoiCategory::University => "🎓",
            PoiCategory::Shelter => "🏢",
            PoiCategory::Hospital => "🏥",
            PoiCategory::Pharmacy => "💊",
            PoiCategory::Park => "🌳",
            PoiCategory::Playground => "🎪",
            PoiCategory::Library => "📚",
            PoiCategory::PlaceOfWorship => "🕍",
            PoiCategory::Supermarket => "🛒",
            PoiCategory::Mall => "🏬",
            PoiCategory::BusStation => "🚌",
            PoiCategory::TrainStation => "🚉",
            PoiCategory::Restaurant => "🍽️",
            PoiCategory::Cafe => "☕",
            PoiCategory::Gym => "💪",
            PoiCategory::Bank => "🏦",
            PoiCategory::PostOffice => "📮",
            PoiCategory::CommunityCenter => "🏛️",
            PoiCategory::Police => "👮",
            PoiCategory::FireStation => "🚒",
            PoiCategory::Recycling => "♻️",
        }
    }
}

impl std::fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoiCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoiCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// An amenity location returned by the POI endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub category: PoiCategory,
    pub name: Option<String>,
    pub location: Coordinate,
}

impl Poi {
    /// Name for display, with a placeholder for unnamed amenities.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_round_trips_every_category() {
        for category in PoiCategory::ALL {
            assert_eq!(category.as_str().parse::<PoiCategory>().unwrap(), category);
        }
    }

    #[test]
    fn from_str_rejects_unknown_category() {
        let err = "dog_park".parse::<PoiCategory>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(ref s) if s == "dog_park"));
    }

    #[test]
    fn serde_uses_wire_ids() {
        let json = serde_json::to_string(&PoiCategory::PlaceOfWorship).unwrap();
        assert_eq!(json, "\"place_of_worship\"");
        let back: PoiCategory = serde_json::from_str("\"bus_station\"").unwrap();
        assert_eq!(back, PoiCategory::BusStation);
    }

    #[test]
    fn display_name_falls_back_for_unnamed() {
        let poi = Poi {
            id: "7".to_string(),
            category: PoiCategory::Park,
            name: None,
            location: Coordinate::new(31.0, 34.0),
        };
        assert_eq!(poi.display_name(), "unnamed");
    }
}
