//! `likes` and `like` commands.

use estate_session::LikeRegistry;

pub(crate) async fn run_likes(registry: &LikeRegistry) {
    registry.load_likes().await;
    let ids = registry.liked_ids().await;
    if ids.is_empty() {
        println!("no liked listings");
        return;
    }
    for id in ids {
        println!("{id}");
    }
}

/// Toggle the like on `listing_id` and report the new state.
///
/// # Errors
///
/// Returns an error carrying the server's message if the change was
/// rejected.
pub(crate) async fn run_like(registry: &LikeRegistry, listing_id: i64) -> anyhow::Result<()> {
    registry.load_likes().await;
    let liked = registry.toggle(listing_id).await?;
    if liked {
        println!("listing {listing_id} liked");
    } else {
        println!("listing {listing_id} unliked");
    }
    Ok(())
}
