use thiserror::Error;

/// Errors returned by the listing API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. `detail` carries the server's
    /// message when the body had one.
    #[error("API rejected request with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A wire record parsed but violates a domain invariant.
    #[error("invalid {record}: {reason}")]
    Normalization { record: String, reason: String },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { detail, .. } => detail.clone(),
            ApiError::Http(_) => "network error".to_string(),
            other => other.to_string(),
        }
    }
}
