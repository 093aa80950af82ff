//! Typed client for the listing, POI, geocoding, and likes HTTP API.

pub mod client;
pub mod error;
mod likes;
pub mod normalize;
pub mod types;

pub use client::EstateClient;
pub use error::ApiError;
