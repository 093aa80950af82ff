//! Conversion of wire records into validated domain types.
//!
//! Category, kind, and feature strings are checked here so the rest of the
//! workspace only sees closed enums.

use chrono::NaiveDate;
use estate_core::{
    AdKind, Coordinate, Features, Listing, Poi, PoiCategory, PropertyKind, SearchKind,
    SearchResult,
};

use crate::error::ApiError;
use crate::types::{AdRecord, PoiFeature, SearchHit};

/// Parses a `"YYYY-MM-DD"` date string into a [`NaiveDate`].
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Converts an [`AdRecord`] into a [`Listing`].
///
/// # Errors
///
/// Returns [`ApiError::Normalization`] for an unknown ad or property kind, a
/// missing or malformed publish date, or a negative rooms/size/price.
pub fn normalize_listing(record: AdRecord) -> Result<Listing, ApiError> {
    let id = record.id;
    let invalid = |reason: String| ApiError::Normalization {
        record: format!("ad {id}"),
        reason,
    };

    let ad_kind = record
        .ad_type
        .parse::<AdKind>()
        .map_err(|e| invalid(e.to_string()))?;
    let property_kind = record
        .property_type
        .parse::<PropertyKind>()
        .map_err(|e| invalid(e.to_string()))?;

    if !record.rooms.is_finite() || record.rooms < 0.0 {
        return Err(invalid(format!("rooms {} is negative", record.rooms)));
    }
    if record.size < 0 {
        return Err(invalid(format!("size {} is negative", record.size)));
    }
    if record.price < 0 {
        return Err(invalid(format!("price {} is negative", record.price)));
    }

    let publish_date = record
        .publish_date
        .as_deref()
        .and_then(parse_date)
        .ok_or_else(|| invalid("missing or malformed publish_date".to_string()))?;

    let features = Features {
        parking: record.has_parking.unwrap_or(false),
        balcony: record.has_balcony.unwrap_or(false),
        garden: record.has_garden.unwrap_or(false),
        pets_allowed: record.pets_allowed.unwrap_or(false),
        elevator: record.has_elevator.unwrap_or(false),
        accessibility: record.accessibility.unwrap_or(false),
    };

    Ok(Listing {
        id,
        ad_kind,
        property_kind,
        location: Coordinate::new(record.latitude, record.longitude),
        address: record.address,
        rooms: record.rooms,
        size: record.size,
        price: record.price,
        floor: record.floor,
        features,
        publisher_name: record.publisher_name,
        contact_phone: record.contact_phone,
        description: record.description.filter(|d| !d.trim().is_empty()),
        publish_date,
        score: record.score,
        stars: record.stars,
    })
}

/// Converts a GeoJSON [`PoiFeature`] into a [`Poi`].
///
/// # Errors
///
/// Returns [`ApiError::Normalization`] for an amenity outside the known
/// category set or a geometry that is not a `[lon, lat]` pair.
pub fn normalize_poi(feature: PoiFeature) -> Result<Poi, ApiError> {
    let id = feature.properties.id.to_string();
    let invalid = |reason: String| ApiError::Normalization {
        record: format!("poi {id}"),
        reason,
    };

    let category: PoiCategory = feature
        .properties
        .amenity
        .parse()
        .map_err(|e: estate_core::CoreError| invalid(e.to_string()))?;

    let [longitude, latitude] = feature.geometry.coordinates[..] else {
        return Err(invalid(format!(
            "expected [lon, lat], got {} coordinates",
            feature.geometry.coordinates.len()
        )));
    };

    Ok(Poi {
        id,
        category,
        name: feature.properties.name.filter(|n| !n.trim().is_empty()),
        location: Coordinate::new(latitude, longitude),
    })
}

/// Converts a [`SearchHit`] into a [`SearchResult`]. Never fails: unknown
/// place types become [`SearchKind::Other`].
#[must_use]
pub fn normalize_search_hit(hit: SearchHit) -> SearchResult {
    SearchResult {
        kind: SearchKind::from_wire(&hit.kind),
        coordinate: Coordinate::new(hit.latitude, hit.longitude),
        address: hit.address,
        name: hit.name,
    }
}
