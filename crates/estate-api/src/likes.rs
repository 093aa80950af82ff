//! Liked-listing endpoints.

use crate::client::EstateClient;
use crate::error::ApiError;
use crate::types::{LikeRecord, LikeRequest};

impl EstateClient {
    /// Ids of the listings the current user has liked (`GET /likes/`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] when the user is not authenticated (401).
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the body is not a list of like records.
    pub async fn fetch_likes(&self) -> Result<Vec<i64>, ApiError> {
        let url = self.endpoint("likes/")?;
        let response = self.client.get(url.clone()).send().await?;
        let records: Vec<LikeRecord> = Self::read_json(response, &url).await?;
        Ok(records.into_iter().map(|r| r.ad_id).collect())
    }

    /// Marks a listing as liked (`POST /like/`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] with the server's message, e.g. when the
    ///   listing is already liked.
    /// - [`ApiError::Http`] on network failure.
    pub async fn like(&self, listing_id: i64) -> Result<(), ApiError> {
        let url = self.endpoint("like/")?;
        let response = self
            .client
            .post(url)
            .json(&LikeRequest { ad_id: listing_id })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Removes a like (`DELETE /like/{id}`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] with the server's message, e.g. when the
    ///   like does not exist.
    /// - [`ApiError::Http`] on network failure.
    pub async fn unlike(&self, listing_id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("like/{listing_id}"))?;
        let response = self.client.delete(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
