//! Wire types for the listing API.
//!
//! These mirror the JSON the API emits and are converted into domain types
//! by [`crate::normalize`]. Fields the API may send as `null` are optional
//! here even when the domain type is not.

use serde::{Deserialize, Serialize};

/// One entry of the `GET /ads` array.
#[derive(Debug, Deserialize)]
pub struct AdRecord {
    pub id: i64,
    /// `"מכירה"` (sale) or `"השכרה"` (rent).
    pub ad_type: String,
    pub property_type: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rooms: f64,
    pub size: i64,
    pub price: i64,
    #[serde(default)]
    pub floor: Option<i64>,
    pub publisher_name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub has_elevator: Option<bool>,
    #[serde(default)]
    pub has_parking: Option<bool>,
    #[serde(default)]
    pub has_balcony: Option<bool>,
    #[serde(default)]
    pub has_garden: Option<bool>,
    #[serde(default)]
    pub pets_allowed: Option<bool>,
    #[serde(default)]
    pub accessibility: Option<bool>,
    /// `"YYYY-MM-DD"`.
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub stars: Option<f64>,
}

// ---------------------------------------------------------------------------
// POST /map/pois
// ---------------------------------------------------------------------------

/// Request body for `POST /map/pois`.
#[derive(Debug, Serialize)]
pub struct PoiLayerRequest<'a> {
    pub layers: Vec<&'a str>,
}

/// GeoJSON `FeatureCollection` envelope. Features are kept raw so that one
/// malformed feature does not fail the whole collection.
#[derive(Debug, Deserialize)]
pub struct PoiFeatureCollection {
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct PoiFeature {
    pub properties: PoiProperties,
    pub geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
pub struct PoiProperties {
    pub id: WireId,
    #[serde(default)]
    pub name: Option<String>,
    pub amenity: String,
}

/// GeoJSON point; `coordinates` is `[longitude, latitude]`.
#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

/// Identifier the API sends either as a string or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for WireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireId::Text(s) => f.write_str(s),
            WireId::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// geocoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeResponse {
    pub address: String,
}

/// One entry of the `GET /search` array.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
    /// `"poi"` or `"geocoding"`.
    #[serde(default)]
    pub source: Option<String>,
}

// ---------------------------------------------------------------------------
// likes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LikeRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub ad_id: i64,
    #[serde(default)]
    pub liked_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LikeRequest {
    pub ad_id: i64,
}

/// Error body shape: `{"detail": "..."}`. Validation failures send a list
/// instead of a string, so `detail` stays untyped.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}
