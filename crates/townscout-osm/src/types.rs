use std::collections::BTreeMap;

use serde::Deserialize;

/// A geographic rectangle scoping the place query around a geocoded town.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Minimum span in degrees below which a box is widened. Nominatim can
    /// return a point-sized box for some matches; a zero-area box would make
    /// the Overpass query cover nothing.
    const MIN_SPAN: f64 = 0.01;

    /// Pads a degenerate (point-sized or inverted) box by a full `MIN_SPAN`
    /// on each side of the axis midpoint. Padding per side rather than
    /// splitting the span keeps the result safely above the threshold even
    /// after float rounding.
    #[must_use]
    pub fn padded_if_degenerate(self) -> Self {
        let mut bbox = self;
        if bbox.north - bbox.south < Self::MIN_SPAN {
            let mid = f64::midpoint(bbox.north, bbox.south);
            bbox.south = mid - Self::MIN_SPAN;
            bbox.north = mid + Self::MIN_SPAN;
        }
        if bbox.east - bbox.west < Self::MIN_SPAN {
            let mid = f64::midpoint(bbox.east, bbox.west);
            bbox.west = mid - Self::MIN_SPAN;
            bbox.east = mid + Self::MIN_SPAN;
        }
        bbox
    }
}

/// A geocoded town: best-match coordinate plus the bounding region used to
/// scope the subsequent place query.
#[derive(Debug, Clone)]
pub struct GeocodedTown {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    pub bbox: BoundingBox,
}

/// A raw Overpass element before normalization.
///
/// Nodes carry `lat`/`lon` directly; ways and relations carry a `center`
/// (requested via `out center`). Either may be absent on malformed records.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}
