//! The search endpoint: geocode → place query → normalize → paginate.
//!
//! Each stage depends on the previous stage's output, so the pipeline runs
//! strictly in sequence with early return on error. All data is
//! request-scoped; nothing is cached between calls.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use townscout_core::{find_category, paginate, SearchResult, CATEGORIES};
use townscout_osm::normalize_elements;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Raw query parameters. `page` and `limit` stay as strings so malformed
/// values reach the handler and surface as the structured error body
/// instead of the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub(super) struct PlacesQuery {
    town: Option<String>,
    category: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<PlacesQuery>,
) -> Result<Json<SearchResult>, ApiError> {
    let town = params.town.as_deref().map(str::trim).unwrap_or_default();
    let category_key = params
        .category
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if town.is_empty() || category_key.is_empty() {
        return Err(ApiError::invalid_input(
            "Missing town or category parameter",
        ));
    }

    let Some(category) = find_category(category_key) else {
        let available: Vec<&str> = CATEGORIES.iter().map(|c| c.key).collect();
        return Err(ApiError::invalid_input(format!(
            "Invalid category '{category_key}'. Available: {}",
            available.join(", ")
        )));
    };

    let page = match params.page.as_deref() {
        None => 1,
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| ApiError::invalid_input("page must be a positive integer"))?,
    };

    // An out-of-range limit is clamped rather than rejected; a non-numeric
    // one is still bad input.
    let requested_limit = match params.limit.as_deref() {
        None => state.config.default_limit,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ApiError::invalid_input("limit must be a positive integer"))?,
    };
    let limit = requested_limit.clamp(1, state.config.max_limit);

    let geocoded = state.geocoder.geocode(town).await?;
    tracing::info!(
        request_id = %req_id.0,
        town,
        resolved = %geocoded.display_name,
        category = category.key,
        "geocoded search town"
    );

    let bbox = geocoded.bbox.padded_if_degenerate();
    let raw_elements = state.overpass.fetch_places(category, &bbox).await?;
    let all_places = normalize_elements(&raw_elements);

    let (places, pagination) = paginate(&all_places, page, limit);
    tracing::debug!(
        total = all_places.len(),
        page,
        returned = places.len(),
        "search complete"
    );

    Ok(Json(SearchResult {
        town: town.to_string(),
        category: category.key.to_string(),
        count: places.len(),
        total_count: all_places.len(),
        places,
        pagination,
    }))
}
