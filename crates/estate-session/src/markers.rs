//! Marker layer and map-center target handed to the map renderer.

use estate_core::{AdKind, Coordinate, Poi, PoiCategory};

use crate::session::ClickedPoint;
use crate::view::ListingCard;

/// Where the map should be centered and at which zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub coordinate: Coordinate,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapMarker {
    Listing {
        listing_id: i64,
        ad_kind: AdKind,
        coordinate: Coordinate,
    },
    Poi {
        poi_id: String,
        category: PoiCategory,
        name: Option<String>,
        coordinate: Coordinate,
    },
    Clicked {
        address: String,
        coordinate: Coordinate,
    },
}

impl MapMarker {
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            MapMarker::Listing {
                ad_kind: AdKind::Sale,
                ..
            } => "🏘️",
            MapMarker::Listing {
                ad_kind: AdKind::Rent,
                ..
            } => "🏬",
            MapMarker::Poi { category, .. } => category.icon(),
            MapMarker::Clicked { .. } => "📍",
        }
    }
}

/// Builds the marker layer: one marker per visible listing, one per POI, and
/// the clicked point last so it draws on top.
pub(crate) fn marker_layer(
    cards: &[ListingCard],
    pois: &[Poi],
    clicked: Option<&ClickedPoint>,
) -> Vec<MapMarker> {
    let listings = cards.iter().map(|card| MapMarker::Listing {
        listing_id: card.listing.id,
        ad_kind: card.listing.ad_kind,
        coordinate: card.listing.location,
    });
    let pois = pois.iter().map(|poi| MapMarker::Poi {
        poi_id: poi.id.clone(),
        category: poi.category,
        name: poi.name.clone(),
        coordinate: poi.location,
    });
    let clicked = clicked.map(|point| MapMarker::Clicked {
        address: point.address.clone(),
        coordinate: point.coordinate,
    });

    listings.chain(pois).chain(clicked).collect()
}
