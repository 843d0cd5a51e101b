//! Normalization of raw Overpass elements into [`Place`] values.
//!
//! Pure functions over the wire types: same input always yields the same
//! output, no hidden state. Elements without usable coordinates are skipped
//! rather than surfaced as errors.

use std::collections::BTreeMap;
use std::collections::HashSet;

use townscout_core::Place;

use crate::types::RawElement;

/// Converts one raw element into a [`Place`], or `None` when the element has
/// no usable in-range coordinates.
///
/// The identifier is `"{kind}/{id}"` (e.g. `node/42`) — OSM numeric ids are
/// only unique per element kind, so the kind prefix keeps identifiers unique
/// within one response. A missing `name` tag falls back to `"Unnamed"`; all
/// tags pass through verbatim.
#[must_use]
pub fn normalize_element(element: &RawElement) -> Option<Place> {
    let lat = element.lat.or_else(|| element.center.map(|c| c.lat))?;
    let lon = element.lon.or_else(|| element.center.map(|c| c.lon))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }

    let name = element
        .tags
        .get("name")
        .cloned()
        .unwrap_or_else(|| "Unnamed".to_string());

    Some(Place {
        id: format!("{}/{}", element.kind, element.id),
        name,
        lat,
        lon,
        address: format_address(&element.tags),
        tags: element.tags.clone(),
    })
}

/// Normalizes a batch of elements, dropping unusable ones and deduplicating
/// by identifier (first occurrence wins).
#[must_use]
pub fn normalize_elements(elements: &[RawElement]) -> Vec<Place> {
    let mut seen = HashSet::new();
    elements
        .iter()
        .filter_map(normalize_element)
        .filter(|place| seen.insert(place.id.clone()))
        .collect()
}

/// Derives a display address from structured OSM address tags.
///
/// `addr:full` is taken verbatim when present. Otherwise the house number
/// and street join with a space, the city follows after a comma, and missing
/// components are omitted. Returns `None` when no address tags exist so the
/// caller can fall back to raw coordinates.
#[must_use]
pub fn format_address(tags: &BTreeMap<String, String>) -> Option<String> {
    if let Some(full) = tags.get("addr:full") {
        return Some(full.clone());
    }

    let street_line = match (tags.get("addr:housenumber"), tags.get("addr:street")) {
        (Some(number), Some(street)) => Some(format!("{number} {street}")),
        (Some(number), None) => Some(number.clone()),
        (None, Some(street)) => Some(street.clone()),
        (None, None) => None,
    };

    match (street_line, tags.get("addr:city")) {
        (Some(line), Some(city)) => Some(format!("{line}, {city}")),
        (Some(line), None) => Some(line),
        (None, Some(city)) => Some(city.clone()),
        (None, None) => None,
    }
}
