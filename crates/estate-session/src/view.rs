//! Derived snapshot of a session for the presentation layer.

use std::collections::BTreeSet;

use estate_core::{Listing, PoiCategory, ProximityResult};

use crate::markers::{MapCenter, MapMarker};
use crate::session::{ClickedPoint, ListingsStatus, PoiStatus};

/// A listing that passed the current filter, annotated with the nearest POI
/// of every active category.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub listing: Listing,
    pub nearest: ProximityResult,
}

/// Everything the map and the result list render. Rebuilt only after the
/// session state changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub listings_status: ListingsStatus,
    pub poi_status: PoiStatus,
    pub active_categories: BTreeSet<PoiCategory>,
    pub cards: Vec<ListingCard>,
    /// Number of loaded listings before filtering.
    pub total_listings: usize,
    pub clicked: Option<ClickedPoint>,
    pub clicked_proximity: ProximityResult,
    pub markers: Vec<MapMarker>,
    pub center: MapCenter,
    pub poi_count: usize,
}

impl MapView {
    /// Ids of the visible listings, in result-list order.
    #[must_use]
    pub fn listing_ids(&self) -> Vec<i64> {
        self.cards.iter().map(|card| card.listing.id).collect()
    }
}
