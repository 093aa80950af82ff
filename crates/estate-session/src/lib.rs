//! Browsing-session state for the listing map: listings, POI layers, the
//! clicked point, filters, and liked listings.

pub mod error;
pub mod likes;
pub mod markers;
pub mod session;
pub mod view;

pub use error::LikeError;
pub use likes::LikeRegistry;
pub use markers::{MapCenter, MapMarker};
pub use session::{ClickedPoint, ListingsStatus, MapSearchSession, PoiStatus, SessionOptions};
pub use view::{ListingCard, MapView};

/// Address shown for a clicked point the geocoder could not resolve.
pub const ADDRESS_NOT_FOUND: &str = "address not found";
