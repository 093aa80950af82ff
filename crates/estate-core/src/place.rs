//! Ranked place candidates returned by free-text search.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::poi::PoiCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    /// A geocoded street address.
    Address,
    /// A known point of interest.
    Place(PoiCategory),
    /// A place type this client has no layer for.
    Other(String),
}

impl SearchKind {
    /// Classifies the API's `type` field.
    #[must_use]
    pub fn from_wire(kind: &str) -> Self {
        if kind == "address" {
            return SearchKind::Address;
        }
        kind.parse::<PoiCategory>()
            .map_or_else(|_| SearchKind::Other(kind.to_string()), SearchKind::Place)
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            SearchKind::Address => "📍",
            SearchKind::Place(category) => category.icon(),
            SearchKind::Other(_) => "📌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub address: Option<String>,
    pub coordinate: Coordinate,
    pub kind: SearchKind,
}

impl SearchResult {
    /// Address to show for the selection; falls back to the name.
    #[must_use]
    pub fn display_address(&self) -> &str {
        self.address
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(&self.name)
    }
}
