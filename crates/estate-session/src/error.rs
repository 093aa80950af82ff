use estate_api::ApiError;
use thiserror::Error;

/// Errors returned by [`crate::LikeRegistry::toggle`].
#[derive(Debug, Error)]
pub enum LikeError {
    /// A toggle for this listing has not resolved yet; the new one was ignored.
    #[error("a like change for listing {listing_id} is already in flight")]
    InFlight { listing_id: i64 },

    /// The server rejected the change or could not be reached. The optimistic
    /// state has been rolled back; `message` is meant for the user.
    #[error("{message}")]
    Mutation {
        listing_id: i64,
        message: String,
        #[source]
        source: ApiError,
    },
}
