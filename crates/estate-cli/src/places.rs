//! `nearest` and `search` commands.

use estate_core::{Coordinate, PoiCategory};
use estate_session::{MapSearchSession, PoiStatus};

/// Resolve the address of a point and print the nearest POI of each
/// requested category.
///
/// # Errors
///
/// Returns an error if the coordinate is out of range or the POIs could not
/// be fetched.
pub(crate) async fn run_nearest(
    session: &MapSearchSession,
    lat: f64,
    lng: f64,
    categories: Vec<PoiCategory>,
) -> anyhow::Result<()> {
    let point = Coordinate::new(lat, lng);
    if !point.is_valid() {
        anyhow::bail!("coordinate {point} is out of range");
    }

    tokio::join!(
        session.set_active_categories(categories),
        session.set_clicked_point(point)
    );

    let view = session.view().await;
    if view.poi_status == PoiStatus::Failed {
        anyhow::bail!("could not load points of interest; rerun with RUST_LOG=debug for details");
    }

    let address = view
        .clicked
        .as_ref()
        .map_or(estate_session::ADDRESS_NOT_FOUND, |p| p.address.as_str());
    println!("{point}  {address}");

    if view.clicked_proximity.is_empty() {
        println!("no points of interest found for the requested categories");
        return Ok(());
    }
    crate::listings::print_proximity(&view.clicked_proximity, "  ");

    let missing: Vec<&str> = view
        .active_categories
        .iter()
        .filter(|c| !view.clicked_proximity.contains_key(*c))
        .map(|c| c.label())
        .collect();
    if !missing.is_empty() {
        println!("  none found: {}", missing.join(", "));
    }

    Ok(())
}

/// Print place and address matches for `query`.
pub(crate) async fn run_search(session: &MapSearchSession, query: &str) {
    let results = session.search_places(query).await;
    if results.is_empty() {
        println!("no results for '{}'", query.trim());
        return;
    }

    for result in &results {
        println!(
            "{} {:<32}{:<40}{}",
            result.kind.icon(),
            result.name,
            result.display_address(),
            result.coordinate
        );
    }
}
