//! The map search session: owns every piece of browsing state and derives
//! the [`MapView`] from it.
//!
//! State lives behind a single async mutex that is never held across a
//! network call. Each fetch captures a generation number before it starts
//! and its result is applied only if no newer request of the same kind was
//! issued in the meantime.

use std::collections::BTreeSet;
use std::sync::Arc;

use estate_api::EstateClient;
use estate_core::{
    filter, nearest_by_category, AppConfig, Coordinate, FilterCriteria, Listing, Poi, PoiCategory,
    ProximityResult, SearchResult,
};
use tokio::sync::Mutex;

use crate::markers::{marker_layer, MapCenter};
use crate::view::{ListingCard, MapView};
use crate::ADDRESS_NOT_FOUND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingsStatus {
    Idle,
    Loading,
    Ready,
    /// The fetch failed. Listings stay empty; there is no automatic retry.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoiStatus {
    /// No categories are active.
    Inactive,
    Loading,
    Ready,
    /// The fetch succeeded but returned no POIs.
    Empty,
    Failed,
}

/// A map point the user clicked or selected from search results.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickedPoint {
    pub coordinate: Coordinate,
    pub address: String,
}

/// Map placement settings for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub default_center: MapCenter,
    /// Zoom used when flying to a search selection.
    pub fly_to_zoom: u8,
}

impl SessionOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_center: MapCenter {
                coordinate: config.map_center,
                zoom: config.map_zoom,
            },
            fly_to_zoom: config.fly_to_zoom,
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_center: MapCenter {
                coordinate: Coordinate::new(31.252_973, 34.791_462),
                zoom: 13,
            },
            fly_to_zoom: 16,
        }
    }
}

#[derive(Debug)]
struct SessionState {
    mounted: bool,
    listings_status: ListingsStatus,
    listings: Vec<Listing>,
    criteria: FilterCriteria,
    active_categories: BTreeSet<PoiCategory>,
    poi_status: PoiStatus,
    pois: Vec<Poi>,
    poi_generation: u64,
    click_generation: u64,
    clicked: Option<ClickedPoint>,
    clicked_proximity: ProximityResult,
    center: MapCenter,
    revision: u64,
    cached_view: Option<(u64, Arc<MapView>)>,
}

impl SessionState {
    fn new(center: MapCenter) -> Self {
        Self {
            mounted: true,
            listings_status: ListingsStatus::Idle,
            listings: Vec::new(),
            criteria: FilterCriteria::default(),
            active_categories: BTreeSet::new(),
            poi_status: PoiStatus::Inactive,
            pois: Vec::new(),
            poi_generation: 0,
            click_generation: 0,
            clicked: None,
            clicked_proximity: ProximityResult::new(),
            center,
            revision: 0,
            cached_view: None,
        }
    }

    fn is_live(&self, operation: &'static str) -> bool {
        if !self.mounted {
            tracing::debug!(operation, "session unmounted; ignoring");
        }
        self.mounted
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Recomputes the clicked point's proximity from the most recently
    /// settled POIs. Called only when the point, the POIs, or the active
    /// categories change.
    fn refresh_clicked_proximity(&mut self) {
        self.clicked_proximity = match &self.clicked {
            Some(point) => {
                nearest_by_category(point.coordinate, &self.pois, &self.active_categories)
            }
            None => ProximityResult::new(),
        };
    }

    fn set_clicked(&mut self, point: ClickedPoint) {
        self.clicked = Some(point);
        self.refresh_clicked_proximity();
        self.touch();
    }

    fn build_view(&self) -> MapView {
        let cards: Vec<ListingCard> = filter::apply(&self.listings, &self.criteria)
            .into_iter()
            .map(|listing| ListingCard {
                nearest: nearest_by_category(listing.location, &self.pois, &self.active_categories),
                listing,
            })
            .collect();
        let markers = marker_layer(&cards, &self.pois, self.clicked.as_ref());

        MapView {
            listings_status: self.listings_status,
            poi_status: self.poi_status,
            active_categories: self.active_categories.clone(),
            clicked: self.clicked.clone(),
            clicked_proximity: self.clicked_proximity.clone(),
            center: self.center,
            poi_count: self.pois.len(),
            total_listings: self.listings.len(),
            cards,
            markers,
        }
    }
}

/// One user's browsing session over the listing map.
///
/// Every operation takes `&self`, so a session can be shared between the
/// tasks that drive it. After [`MapSearchSession::unmount`] all operations
/// are no-ops and pending completions are dropped.
#[derive(Debug)]
pub struct MapSearchSession {
    client: EstateClient,
    options: SessionOptions,
    state: Mutex<SessionState>,
}

impl MapSearchSession {
    #[must_use]
    pub fn new(client: EstateClient, options: SessionOptions) -> Self {
        Self {
            client,
            options,
            state: Mutex::new(SessionState::new(options.default_center)),
        }
    }

    /// Fetches the full listing set. Runs once per session: calls made after
    /// the first fetch started (or failed) do nothing.
    pub async fn load_listings(&self) {
        {
            let mut state = self.state.lock().await;
            if !state.is_live("load_listings") || state.listings_status != ListingsStatus::Idle {
                return;
            }
            state.listings_status = ListingsStatus::Loading;
            state.touch();
        }

        let result = self.client.fetch_listings().await;

        let mut state = self.state.lock().await;
        if !state.mounted {
            tracing::debug!("session unmounted; dropping listings response");
            return;
        }
        match result {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "listings loaded");
                state.listings = listings;
                state.listings_status = ListingsStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load listings");
                state.listings.clear();
                state.listings_status = ListingsStatus::Failed;
            }
        }
        state.touch();
    }

    /// Replaces the active POI categories and refetches their POIs.
    ///
    /// An empty set clears POIs at once without a request. Either way, any
    /// fetch still in flight from an earlier call is superseded and its
    /// result will be discarded.
    pub async fn set_active_categories<I>(&self, categories: I)
    where
        I: IntoIterator<Item = PoiCategory>,
    {
        let categories: BTreeSet<PoiCategory> = categories.into_iter().collect();

        let generation = {
            let mut state = self.state.lock().await;
            if !state.is_live("set_active_categories") {
                return;
            }
            state.poi_generation += 1;
            state.active_categories.clone_from(&categories);
            if categories.is_empty() {
                state.pois.clear();
                state.poi_status = PoiStatus::Inactive;
            } else {
                state.poi_status = PoiStatus::Loading;
            }
            state.refresh_clicked_proximity();
            state.touch();
            if categories.is_empty() {
                return;
            }
            state.poi_generation
        };

        let result = self.client.fetch_pois(&categories).await;

        let mut state = self.state.lock().await;
        if !state.mounted || state.poi_generation != generation {
            tracing::debug!(
                generation,
                current = state.poi_generation,
                "dropping superseded POI response"
            );
            return;
        }
        match result {
            Ok(pois) => {
                tracing::info!(
                    count = pois.len(),
                    categories = categories.len(),
                    "POIs loaded"
                );
                state.poi_status = if pois.is_empty() {
                    PoiStatus::Empty
                } else {
                    PoiStatus::Ready
                };
                state.pois = pois;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load POIs");
                state.pois.clear();
                state.poi_status = PoiStatus::Failed;
            }
        }
        state.refresh_clicked_proximity();
        state.touch();
    }

    /// Adds the category if inactive, removes it otherwise.
    pub async fn toggle_category(&self, category: PoiCategory) {
        let mut categories = self.active_categories().await;
        if !categories.remove(&category) {
            categories.insert(category);
        }
        self.set_active_categories(categories).await;
    }

    /// Records a map click. The point appears once its address is resolved;
    /// if reverse geocoding fails it appears with a placeholder address. A
    /// later click or search selection supersedes this one.
    pub async fn set_clicked_point(&self, coordinate: Coordinate) {
        let generation = {
            let mut state = self.state.lock().await;
            if !state.is_live("set_clicked_point") {
                return;
            }
            state.click_generation += 1;
            state.click_generation
        };

        let address = match self.client.reverse_geocode(coordinate).await {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!(error = %e, %coordinate, "reverse geocoding failed");
                ADDRESS_NOT_FOUND.to_string()
            }
        };

        let mut state = self.state.lock().await;
        if !state.mounted || state.click_generation != generation {
            tracing::debug!(%coordinate, "dropping superseded click");
            return;
        }
        state.set_clicked(ClickedPoint {
            coordinate,
            address,
        });
    }

    /// Makes a search result the clicked point and centers the map on it.
    pub async fn set_search_selection(&self, result: &SearchResult) {
        let mut state = self.state.lock().await;
        if !state.is_live("set_search_selection") {
            return;
        }
        state.click_generation += 1;
        state.center = MapCenter {
            coordinate: result.coordinate,
            zoom: self.options.fly_to_zoom,
        };
        state.set_clicked(ClickedPoint {
            coordinate: result.coordinate,
            address: result.display_address().to_string(),
        });
    }

    pub async fn set_filter_criteria(&self, criteria: FilterCriteria) {
        let mut state = self.state.lock().await;
        if !state.is_live("set_filter_criteria") || state.criteria == criteria {
            return;
        }
        state.criteria = criteria;
        state.touch();
    }

    /// Free-text place search. A blank query yields nothing without a
    /// request, and failures are logged and reported as no results.
    pub async fn search_places(&self, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() || !self.state.lock().await.is_live("search_places") {
            return Vec::new();
        }
        match self.client.search(query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(error = %e, query, "place search failed");
                Vec::new()
            }
        }
    }

    /// Ends the session. Later operations do nothing and in-flight results
    /// are discarded when they arrive.
    pub async fn unmount(&self) {
        let mut state = self.state.lock().await;
        state.mounted = false;
        state.cached_view = None;
    }

    /// Current derived view. Repeated calls without an intervening state
    /// change return the same snapshot.
    pub async fn view(&self) -> Arc<MapView> {
        let mut state = self.state.lock().await;
        if let Some((revision, view)) = &state.cached_view {
            if *revision == state.revision {
                return Arc::clone(view);
            }
        }
        let view = Arc::new(state.build_view());
        let revision = state.revision;
        state.cached_view = Some((revision, Arc::clone(&view)));
        view
    }

    pub async fn listings_status(&self) -> ListingsStatus {
        self.state.lock().await.listings_status
    }

    pub async fn poi_status(&self) -> PoiStatus {
        self.state.lock().await.poi_status
    }

    pub async fn active_categories(&self) -> BTreeSet<PoiCategory> {
        self.state.lock().await.active_categories.clone()
    }

    pub async fn filter_criteria(&self) -> FilterCriteria {
        self.state.lock().await.criteria.clone()
    }

    pub async fn clicked_point(&self) -> Option<ClickedPoint> {
        self.state.lock().await.clicked.clone()
    }

    pub async fn is_mounted(&self) -> bool {
        self.state.lock().await.mounted
    }
}
