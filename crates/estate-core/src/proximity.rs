//! Nearest point of interest per amenity category.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::geo::{distance_km, Coordinate};
use crate::poi::{Poi, PoiCategory};

/// The closest POI of one category and its distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestPoi {
    pub poi: Poi,
    pub distance_km: f64,
}

/// Nearest POI keyed by category.
///
/// A category without any matching POI is absent. Absence means "no data",
/// never "zero distance".
pub type ProximityResult = BTreeMap<PoiCategory, NearestPoi>;

/// Finds, for every active category, the POI closest to `origin`.
///
/// Equidistant POIs resolve to the one encountered first in `pois`.
#[must_use]
pub fn nearest_by_category(
    origin: Coordinate,
    pois: &[Poi],
    active: &BTreeSet<PoiCategory>,
) -> ProximityResult {
    let mut result = ProximityResult::new();
    for &category in active {
        let nearest = pois
            .iter()
            .filter(|poi| poi.category == category)
            .map(|poi| (poi, distance_km(origin, poi.location)))
            .fold(None::<(&Poi, f64)>, |best, candidate| match best {
                Some((_, best_km)) if best_km <= candidate.1 => best,
                _ => Some(candidate),
            });

        if let Some((poi, distance_km)) = nearest {
            result.insert(
                category,
                NearestPoi {
                    poi: poi.clone(),
                    distance_km,
                },
            );
        }
    }
    result
}
