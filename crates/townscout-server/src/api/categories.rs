use axum::Json;
use serde::Serialize;

use townscout_core::{Category, CATEGORIES};

#[derive(Debug, Serialize)]
pub(super) struct CategoryList {
    categories: &'static [Category],
}

/// Returns the static category table. No upstream calls.
pub(super) async fn list_categories() -> Json<CategoryList> {
    Json(CategoryList {
        categories: CATEGORIES,
    })
}
