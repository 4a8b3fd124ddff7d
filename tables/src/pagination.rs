//! Pagination slicer.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page window over the post-filter row set.
///
/// `total_items` is always the post-filter count, maintained by the reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-indexed.
    pub page: usize,
    pub page_size: usize,
    /// Allowed page sizes offered to the user. Empty means unrestricted.
    #[serde(default)]
    pub page_sizes: Vec<usize>,
    #[serde(default)]
    pub total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE, page_sizes: vec![10, 20, 30], total_items: 0 }
    }
}

impl Pagination {
    #[must_use]
    pub fn last_page(&self) -> usize {
        last_page(self.total_items, self.page_size)
    }

    /// Whether `size` may be selected.
    #[must_use]
    pub fn allows_page_size(&self, size: usize) -> bool {
        size > 0 && (self.page_sizes.is_empty() || self.page_sizes.contains(&size))
    }

    /// Copy with `total_items` replaced and `page` clamped to the new range.
    #[must_use]
    pub fn with_total(&self, total_items: usize) -> Self {
        let page = clamp_page(self.page, total_items, self.page_size);
        Self { page, total_items, ..self.clone() }
    }

    /// 1-based indices of the first and last item on the current page,
    /// `(0, 0)` when there is nothing to show.
    #[must_use]
    pub fn range_label(&self) -> (usize, usize) {
        if self.total_items == 0 || self.page_size == 0 {
            return (0, 0);
        }
        // Unsettled pages read as page 1.
        let page = self.page.max(1);
        let first = (page - 1) * self.page_size + 1;
        let last = (page * self.page_size).min(self.total_items);
        (first.min(self.total_items), last)
    }
}

/// Number of pages needed for `total_items`; never less than 1.
#[must_use]
pub fn last_page(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Clamp `page` into `[1, last_page]`.
#[must_use]
pub fn clamp_page(page: usize, total_items: usize, page_size: usize) -> usize {
    page.clamp(1, last_page(total_items, page_size))
}

/// `rows[(page-1)*page_size .. page*page_size]`, bounded by the slice length.
#[must_use]
pub fn slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}
