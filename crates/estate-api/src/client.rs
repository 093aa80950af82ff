//! HTTP client for the listing API.
//!
//! Wraps `reqwest` with a cookie store (the API authenticates by session
//! cookie), typed error handling, and per-record validation. Batch endpoints
//! skip individual records that fail to parse instead of failing the batch.

use std::collections::BTreeSet;
use std::time::Duration;

use estate_core::{AppConfig, Coordinate, Listing, Poi, PoiCategory, SearchResult};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::normalize::{normalize_listing, normalize_poi, normalize_search_hit};
use crate::types::{
    AdRecord, ErrorBody, PoiFeature, PoiFeatureCollection, PoiLayerRequest,
    ReverseGeocodeResponse, SearchHit,
};

/// Client for the listing API.
///
/// Use [`EstateClient::from_config`] in binaries or [`EstateClient::new`] to
/// point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct EstateClient {
    pub(crate) client: Client,
    base_url: Url,
}

impl EstateClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .cookie_store(true)
            .build()?;

        // A trailing slash makes `Url::join` append to the base path instead
        // of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`EstateClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            config.http_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches every published listing (`GET /ads`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Rejected`] on a non-2xx status.
    /// - [`ApiError::Deserialize`] if the body is not a JSON array.
    pub async fn fetch_listings(&self) -> Result<Vec<Listing>, ApiError> {
        let url = self.endpoint("ads")?;
        let response = self.client.get(url.clone()).send().await?;
        let records: Vec<serde_json::Value> = Self::read_json(response, &url).await?;

        let total = records.len();
        let listings: Vec<Listing> = records
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<AdRecord>(value)
                    .map_err(|e| ApiError::Deserialize {
                        context: "ad record".to_string(),
                        source: e,
                    })
                    .and_then(normalize_listing)
                    .map_err(|e| {
                        tracing::warn!(error = %e, "fetch_listings: skipping malformed ad");
                    })
                    .ok()
            })
            .collect();

        tracing::debug!(total, kept = listings.len(), "fetched listings");
        Ok(listings)
    }

    /// Fetches every POI whose category is in `categories`
    /// (`POST /map/pois`). An empty set returns an empty list without a
    /// request.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Rejected`] on a non-2xx status.
    /// - [`ApiError::Deserialize`] if the body is not a feature collection.
    pub async fn fetch_pois(
        &self,
        categories: &BTreeSet<PoiCategory>,
    ) -> Result<Vec<Poi>, ApiError> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.endpoint("map/pois")?;
        let body = PoiLayerRequest {
            layers: categories.iter().map(|c| c.as_str()).collect(),
        };
        let response = self.client.post(url.clone()).json(&body).send().await?;
        let collection: PoiFeatureCollection = Self::read_json(response, &url).await?;

        let pois: Vec<Poi> = collection
            .features
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<PoiFeature>(value)
                    .map_err(|e| ApiError::Deserialize {
                        context: "poi feature".to_string(),
                        source: e,
                    })
                    .and_then(normalize_poi)
                    .map_err(|e| {
                        tracing::warn!(error = %e, "fetch_pois: skipping malformed feature");
                    })
                    .ok()
            })
            .collect();

        tracing::debug!(
            categories = categories.len(),
            pois = pois.len(),
            "fetched points of interest"
        );
        Ok(pois)
    }

    /// Resolves a coordinate to a street address (`GET /reverse_geocode/`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] when the API has no address for the point
    ///   (it answers 404).
    /// - [`ApiError::Http`] / [`ApiError::Deserialize`] as for other calls.
    pub async fn reverse_geocode(&self, at: Coordinate) -> Result<String, ApiError> {
        let mut url = self.endpoint("reverse_geocode/")?;
        url.query_pairs_mut()
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lon", &at.longitude.to_string());

        let response = self.client.get(url.clone()).send().await?;
        let body: ReverseGeocodeResponse = Self::read_json(response, &url).await?;
        Ok(body.address)
    }

    /// Free-text place and address search (`GET /search?q=`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Rejected`] on a non-2xx status.
    /// - [`ApiError::Deserialize`] if the body is not a JSON array.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut().append_pair("q", query);

        let response = self.client.get(url.clone()).send().await?;
        let hits: Vec<serde_json::Value> = Self::read_json(response, &url).await?;

        Ok(hits
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<SearchHit>(value)
                    .map_err(|e| {
                        tracing::warn!(error = %e, "search: skipping malformed hit");
                    })
                    .ok()
            })
            .map(normalize_search_hit)
            .collect())
    }

    /// Joins `path` onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("cannot join '{path}': {e}")))
    }

    /// Returns the response if it has a 2xx status, otherwise an
    /// [`ApiError::Rejected`] carrying the server's `detail` message.
    pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail)
            .map(|d| match d {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    /// Checks the status and parses the body as `T`.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        response: Response,
        url: &Url,
    ) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
