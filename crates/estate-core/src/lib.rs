pub mod app_config;
pub mod config;
pub mod filter;
pub mod geo;
pub mod listing;
pub mod place;
pub mod poi;
pub mod proximity;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::FilterCriteria;
pub use geo::{distance_km, format_distance, Coordinate};
pub use listing::{AdKind, Feature, Features, Listing, PropertyKind};
pub use place::{SearchKind, SearchResult};
pub use poi::{Poi, PoiCategory};
pub use proximity::{nearest_by_category, NearestPoi, ProximityResult};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown POI category: {0}")]
    UnknownCategory(String),

    #[error("unknown listing feature: {0}")]
    UnknownFeature(String),

    #[error("unknown property kind: {0}")]
    UnknownPropertyKind(String),

    #[error("unknown ad kind: {0}")]
    UnknownAdKind(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
