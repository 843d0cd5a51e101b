//! Clients for the two upstream OpenStreetMap services and the normalizer
//! that turns their raw records into [`townscout_core::Place`] values.
//!
//! [`GeocoderClient`] resolves a free-text town name via Nominatim;
//! [`OverpassClient`] fetches raw point-of-interest records for a category
//! within a bounding box. Both take their base URL at construction so tests
//! can point them at a mock server.

mod error;
mod geocode;
mod normalize;
mod overpass;
mod types;

pub use error::OsmError;
pub use geocode::GeocoderClient;
pub use normalize::{format_address, normalize_element, normalize_elements};
pub use overpass::OverpassClient;
pub use types::{BoundingBox, Center, GeocodedTown, RawElement};
