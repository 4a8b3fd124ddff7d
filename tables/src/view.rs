//! Derived view: filter → sort → paginate over the raw dataset.
//!
//! Two selection projections come out of here and must stay separate: the
//! header tri-state is computed over the page rows, while
//! `selected_in_filtered` counts over the whole post-filter set.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::filter::filter_rows;
use crate::model::{Column, Row, TableData};
use crate::ordering::visible_columns;
use crate::pagination::{Pagination, slice};
use crate::selection::SelectAllState;
use crate::sort::sort_rows;
use crate::state::TableState;

/// What the presentation layer should show instead of, or along with, rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    /// The dataset has no rows at all.
    Empty,
    /// Rows exist but none pass the filters/search.
    NoMatches,
    Ready,
}

#[derive(Clone, Debug)]
pub struct TableView<'a> {
    pub columns: Vec<&'a Column>,
    /// Rows on the current page.
    pub rows: Vec<&'a Row>,
    /// Pagination with `total_items` equal to the post-filter count.
    pub pagination: Pagination,
    /// Header checkbox state over `rows`.
    pub select_all: SelectAllState,
    /// Selected rows among the post-filter set.
    pub selected_in_filtered: usize,
    pub status: ViewStatus,
    state: &'a TableState,
}

impl<'a> TableView<'a> {
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.pagination.total_items
    }

    #[must_use]
    pub fn is_selected(&self, row_id: &str) -> bool {
        self.state.selection.is_selected(row_id)
    }

    #[must_use]
    pub fn is_expanded(&self, row_id: &str) -> bool {
        self.state.expansion.is_expanded(row_id)
    }

    #[must_use]
    pub fn row_ids(&self) -> Vec<&'a str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Rows passing filters and search, sorted by the active sort.
#[must_use]
pub fn filtered_rows<'a>(state: &TableState, data: &'a TableData) -> Vec<&'a Row> {
    let mut rows = filter_rows(&data.rows, &state.filters, &state.toolbar.search);
    sort_rows(&mut rows, state.sort.as_ref());
    rows
}

/// The slice of `filtered` shown on the current page.
#[must_use]
pub fn page_rows<'a>(state: &TableState, filtered: &[&'a Row]) -> Vec<&'a Row> {
    if !state.options.has_pagination {
        return filtered.to_vec();
    }
    let pagination = state.pagination.with_total(filtered.len());
    slice(filtered, pagination.page, pagination.page_size).to_vec()
}

/// Compute the full derived view for `state` over `data`.
#[must_use]
pub fn derive_view<'a>(state: &'a TableState, data: &'a TableData) -> TableView<'a> {
    let filtered = filtered_rows(state, data);
    let rows = page_rows(state, &filtered);
    let pagination = state.pagination.with_total(filtered.len());
    let select_all = state.selection.select_all_state(rows.iter().map(|r| r.id.as_str()));
    let selected_in_filtered = state.selection.count_in(filtered.iter().map(|r| r.id.as_str()));
    let status = if state.is_loading {
        ViewStatus::Loading
    } else if data.is_empty() {
        ViewStatus::Empty
    } else if filtered.is_empty() {
        ViewStatus::NoMatches
    } else {
        ViewStatus::Ready
    };
    TableView {
        columns: visible_columns(&data.columns, &state.ordering),
        rows,
        pagination,
        select_all,
        selected_in_filtered,
        status,
        state,
    }
}
