//! Liked-listing registry with optimistic toggling.

use std::collections::BTreeSet;

use estate_api::EstateClient;
use tokio::sync::Mutex;

use crate::error::LikeError;

#[derive(Debug, Default)]
struct LikeState {
    liked: BTreeSet<i64>,
    pending: BTreeSet<i64>,
    /// Ids toggled since the running load was issued. The server snapshot
    /// may predate those toggles, so their local value wins.
    touched: BTreeSet<i64>,
    loading: bool,
    loaded: bool,
}

/// Tracks which listings the user has liked.
///
/// Toggles apply locally before the server confirms and roll back if the
/// server rejects them. Only one toggle per listing may be in flight.
#[derive(Debug)]
pub struct LikeRegistry {
    client: EstateClient,
    state: Mutex<LikeState>,
}

impl LikeRegistry {
    #[must_use]
    pub fn new(client: EstateClient) -> Self {
        Self {
            client,
            state: Mutex::new(LikeState::default()),
        }
    }

    /// Fetches the server's liked set once. On failure the registry keeps
    /// its local state and a later call may try again. A call made while
    /// another load is running does nothing.
    ///
    /// Listings toggled after the load was issued keep their local state.
    pub async fn load_likes(&self) {
        {
            let mut state = self.state.lock().await;
            if state.loaded || state.loading {
                return;
            }
            state.loading = true;
            state.touched.clear();
        }

        let result = self.client.fetch_likes().await;

        let mut state = self.state.lock().await;
        state.loading = false;
        let ids = match result {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load liked listings");
                state.touched.clear();
                return;
            }
        };

        let mut liked: BTreeSet<i64> = ids.into_iter().collect();
        for id in state.touched.iter().chain(&state.pending) {
            if state.liked.contains(id) {
                liked.insert(*id);
            } else {
                liked.remove(id);
            }
        }
        tracing::debug!(count = liked.len(), "liked listings loaded");
        state.liked = liked;
        state.touched.clear();
        state.loaded = true;
    }

    /// Flips the like state of a listing and returns the new state.
    ///
    /// # Errors
    ///
    /// - [`LikeError::InFlight`] if a toggle for the same listing has not
    ///   resolved yet. Nothing changes.
    /// - [`LikeError::Mutation`] if the server call fails. The local state is
    ///   rolled back to what it was before the call.
    pub async fn toggle(&self, listing_id: i64) -> Result<bool, LikeError> {
        let now_liked = {
            let mut state = self.state.lock().await;
            if !state.pending.insert(listing_id) {
                return Err(LikeError::InFlight { listing_id });
            }
            if state.loading {
                state.touched.insert(listing_id);
            }
            if state.liked.remove(&listing_id) {
                false
            } else {
                state.liked.insert(listing_id);
                true
            }
        };

        let result = if now_liked {
            self.client.like(listing_id).await
        } else {
            self.client.unlike(listing_id).await
        };

        let mut state = self.state.lock().await;
        state.pending.remove(&listing_id);
        match result {
            Ok(()) => {
                tracing::debug!(listing_id, liked = now_liked, "like state changed");
                Ok(now_liked)
            }
            Err(source) => {
                if now_liked {
                    state.liked.remove(&listing_id);
                } else {
                    state.liked.insert(listing_id);
                }
                tracing::warn!(listing_id, error = %source, "like change rolled back");
                Err(LikeError::Mutation {
                    listing_id,
                    message: source.user_message(),
                    source,
                })
            }
        }
    }

    pub async fn is_liked(&self, listing_id: i64) -> bool {
        self.state.lock().await.liked.contains(&listing_id)
    }

    /// True while a toggle for the listing is awaiting the server.
    pub async fn is_pending(&self, listing_id: i64) -> bool {
        self.state.lock().await.pending.contains(&listing_id)
    }

    pub async fn liked_ids(&self) -> BTreeSet<i64> {
        self.state.lock().await.liked.clone()
    }
}
