//! `listings` command: load, filter and print listings.

use estate_core::{format_distance, FilterCriteria, PoiCategory, ProximityResult};
use estate_session::{ListingsStatus, MapSearchSession, PoiStatus};

/// Format an optional star rating, returning `"—"` when unrated.
fn fmt_stars(stars: Option<f64>) -> String {
    stars.map_or_else(|| "\u{2014}".to_string(), |s| format!("{s:.1}"))
}

pub(crate) fn print_proximity(nearest: &ProximityResult, indent: &str) {
    for (category, hit) in nearest {
        println!(
            "{indent}{} {:<16}{} ({})",
            category.icon(),
            category.label(),
            hit.poi.display_name(),
            format_distance(hit.distance_km)
        );
    }
}

/// Load every listing, apply `criteria`, and print a table. With `near`
/// set, each row is followed by the closest POI of each category.
///
/// # Errors
///
/// Returns an error if the listings could not be fetched.
pub(crate) async fn run_listings(
    session: &MapSearchSession,
    criteria: FilterCriteria,
    near: Vec<PoiCategory>,
) -> anyhow::Result<()> {
    if near.is_empty() {
        session.load_listings().await;
    } else {
        tokio::join!(session.load_listings(), session.set_active_categories(near));
    }
    let unfiltered = criteria.is_unconstrained();
    session.set_filter_criteria(criteria).await;

    let view = session.view().await;
    if view.listings_status == ListingsStatus::Failed {
        anyhow::bail!("could not load listings; rerun with RUST_LOG=debug for details");
    }
    if view.poi_status == PoiStatus::Failed {
        eprintln!("warning: POIs could not be loaded; proximity is omitted");
    }
    if view.cards.is_empty() {
        if unfiltered {
            println!("no listings published");
        } else {
            println!("no listings match the given filters");
        }
        return Ok(());
    }

    println!(
        "{:<6}{:<6}{:<11}{:>6}{:>7}{:>12}{:>7}  ADDRESS",
        "ID", "KIND", "TYPE", "ROOMS", "SIZE", "PRICE", "STARS"
    );
    for card in &view.cards {
        let listing = &card.listing;
        println!(
            "{:<6}{:<6}{:<11}{:>6}{:>7}{:>12}{:>7}  {}",
            listing.id,
            listing.ad_kind.to_string(),
            listing.property_kind.to_string(),
            listing.rooms,
            listing.size,
            listing.price,
            fmt_stars(listing.stars),
            listing.address
        );
        print_proximity(&card.nearest, "      ");
    }
    println!("{} of {} listings shown", view.cards.len(), view.total_listings);

    Ok(())
}
