use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pagination::PaginationInfo;

/// One normalized point of interest.
///
/// Identifiers are unique within a single upstream response but carry no
/// cross-query stability guarantee. Coordinates are always in valid
/// geographic ranges; everything else is only as trustworthy as the
/// upstream data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub tags: BTreeMap<String, String>,
}

/// Response envelope for one `(town, category, page)` query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub town: String,
    pub category: String,
    pub places: Vec<Place>,
    pub count: usize,
    pub total_count: usize,
    pub pagination: PaginationInfo,
}
