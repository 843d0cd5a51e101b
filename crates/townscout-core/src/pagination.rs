//! Page-window slicing over an in-memory result list.
//!
//! Pages are 1-based. A page past the end of the list is a valid request
//! that yields an empty slice; page 0 must be rejected by the caller before
//! reaching this module.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    /// Computes pagination metadata for a list of `total_count` items.
    ///
    /// `total_pages` is `ceil(total_count / limit)` with a floor of 1, so an
    /// empty result set still reports a single (empty) page.
    #[must_use]
    pub fn new(page: usize, limit: usize, total_count: usize) -> Self {
        let total_pages = total_count.div_ceil(limit).max(1);
        Self {
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Returns the items in the window `[(page-1)*limit, page*limit)` clipped to
/// the list bounds, plus the pagination metadata for the whole list.
///
/// # Panics
///
/// Debug-asserts that `page >= 1` and `limit >= 1`; both are enforced by the
/// request layer before this is called.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> (Vec<T>, PaginationInfo) {
    debug_assert!(page >= 1, "page is 1-based");
    debug_assert!(limit >= 1, "limit must be positive");

    let info = PaginationInfo::new(page, limit, items.len());

    let start = (page - 1).saturating_mul(limit).min(items.len());
    let end = start.saturating_add(limit).min(items.len());

    (items[start..end].to_vec(), info)
}
