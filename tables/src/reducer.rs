//! View-state reducer: `(state, action) -> state'`.
//!
//! Invalid payloads (unknown columns or rows, out-of-range sizes) never
//! fail. The reducer logs the reason at debug level and returns the input
//! `Arc` untouched, so a misbehaving host can never break a render.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::action::TableAction;
use crate::filter::Filter;
use crate::model::TableData;
use crate::ordering::is_valid_ordering;
use crate::sort::SortSpec;
use crate::state::{SelectAllScope, StaleIdPolicy, TableOptions, TableState};
use crate::toolbar::ActiveBar;
use crate::view::{filtered_rows, page_rows};

/// Why an action was ignored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column is not sortable: {0}")]
    UnsortableColumn(String),
    #[error("value '{value}' is not an option of column {column_id}")]
    InvalidFilterValue { column_id: String, value: String },
    #[error("unknown row: {0}")]
    UnknownRow(String),
    #[error("invalid page: {0}")]
    InvalidPage(usize),
    #[error("page size not allowed: {0}")]
    InvalidPageSize(usize),
    #[error("ordering references unknown or duplicate columns")]
    InvalidOrdering,
    #[error("no rows to select")]
    EmptySelectionScope,
    #[error("{0} is disabled for this table")]
    FeatureDisabled(&'static str),
    #[error("unknown batch action: {0}")]
    UnknownBatchAction(String),
    #[error("row {row_id} has no action {action_id}")]
    UnknownRowAction { row_id: String, action_id: String },
    #[error("batch action needs a selection")]
    NothingSelected,
}

/// Apply `action` to `state`. Returns the same `Arc` when the action is
/// ignored or changes nothing.
#[must_use]
pub fn reduce(state: &Arc<TableState>, data: &TableData, action: &TableAction) -> Arc<TableState> {
    match try_reduce(state, data, action) {
        Ok(next) if next == **state => Arc::clone(state),
        Ok(next) => Arc::new(next),
        Err(reason) => {
            debug!(action = action.kind(), %reason, "table action ignored");
            Arc::clone(state)
        }
    }
}

/// Like [`reduce`] but surfaces the rejection reason.
///
/// # Errors
///
/// Returns a [`Rejection`] when the payload does not fit `data`.
pub fn try_reduce(state: &TableState, data: &TableData, action: &TableAction) -> Result<TableState, Rejection> {
    require_enabled(&state.options, action)?;
    let mut next = state.clone();
    match action {
        TableAction::ApplyFilter(filters) => next.filters = validate_filters(data, filters)?,
        TableAction::ClearFilters => next.filters.clear(),
        TableAction::ChangeSort(sort) => next.sort = validate_sort(data, sort.as_ref())?,
        TableAction::ChangePage(page) => {
            if *page == 0 {
                return Err(Rejection::InvalidPage(*page));
            }
            next.pagination.page = *page;
        }
        TableAction::ChangePageSize(size) => {
            if !next.pagination.allows_page_size(*size) {
                return Err(Rejection::InvalidPageSize(*size));
            }
            next.pagination.page_size = *size;
            next.pagination.page = 1;
        }
        TableAction::ToggleRowSelected(id) => {
            require_row(data, id)?;
            next.selection.toggle_row(id);
        }
        TableAction::ToggleSelectAll => {
            let filtered = filtered_rows(state, data);
            let scope = match state.options.select_all_scope {
                SelectAllScope::Page => page_rows(state, &filtered),
                SelectAllScope::Filtered => filtered,
            };
            if scope.is_empty() {
                return Err(Rejection::EmptySelectionScope);
            }
            next.selection.select_all(scope.iter().map(|r| r.id.as_str()));
        }
        TableAction::ToggleRowExpanded(id) => {
            require_row(data, id)?;
            next.expansion.toggle(id);
        }
        TableAction::ChangeOrdering(ordering) => {
            if !is_valid_ordering(&data.columns, ordering) {
                return Err(Rejection::InvalidOrdering);
            }
            next.ordering.clone_from(ordering);
        }
        TableAction::SetLoading(loading) => next.is_loading = *loading,
        TableAction::ApplySearch(search) => next.toolbar.search.clone_from(search),
        TableAction::ToggleToolbar(bar) => next.toolbar.active_bar = state.toolbar.toggled(*bar),
        TableAction::CancelBatchAction => next.selection.clear(),
        TableAction::DataChanged => {}
        TableAction::ApplyBatchAction(id) => {
            if data.batch_action(id).is_none() {
                return Err(Rejection::UnknownBatchAction(id.clone()));
            }
            if state.selection.is_empty() {
                return Err(Rejection::NothingSelected);
            }
        }
        TableAction::ApplyRowAction { row_id, action_id } => {
            let row = data.row(row_id).ok_or_else(|| Rejection::UnknownRow(row_id.clone()))?;
            if row.row_action(action_id).is_none() {
                return Err(Rejection::UnknownRowAction { row_id: row_id.clone(), action_id: action_id.clone() });
            }
        }
    }
    Ok(settle(next, data))
}

/// Recompute derived bookkeeping after a transition: post-filter total,
/// page clamp, and stale-id pruning when enabled.
#[must_use]
pub fn settle(mut state: TableState, data: &TableData) -> TableState {
    let filtered = filtered_rows(&state, data);
    state.pagination = state.pagination.with_total(filtered.len());
    if state.options.stale_ids == StaleIdPolicy::Prune {
        let keep: BTreeSet<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        state.selection.retain_in(&keep);
        state.expansion.retain_in(&keep);
    }
    state
}

/// Reject actions that belong to a feature the table has switched off.
fn require_enabled(options: &TableOptions, action: &TableAction) -> Result<(), Rejection> {
    let gate = match action {
        TableAction::ApplyFilter(_) | TableAction::ClearFilters | TableAction::ToggleToolbar(ActiveBar::Filter) => {
            Some((options.has_filter, "filter"))
        }
        TableAction::ApplySearch(_) => Some((options.has_search, "search")),
        TableAction::ChangePage(_) | TableAction::ChangePageSize(_) => Some((options.has_pagination, "pagination")),
        TableAction::ToggleRowSelected(_)
        | TableAction::ToggleSelectAll
        | TableAction::CancelBatchAction
        | TableAction::ApplyBatchAction(_) => Some((options.has_row_selection, "row selection")),
        TableAction::ToggleRowExpanded(_) => Some((options.has_row_expansion, "row expansion")),
        TableAction::ApplyRowAction { .. } => Some((options.has_row_actions, "row actions")),
        TableAction::ChangeOrdering(_) | TableAction::ToggleToolbar(ActiveBar::ColumnSelection) => {
            Some((options.has_column_selection, "column selection"))
        }
        TableAction::ChangeSort(_) | TableAction::SetLoading(_) | TableAction::DataChanged => None,
    };
    match gate {
        Some((false, feature)) => Err(Rejection::FeatureDisabled(feature)),
        _ => Ok(()),
    }
}

/// Filters that fit `data`, with empty values dropped and the last value per
/// column kept.
///
/// # Errors
///
/// Unknown columns and values outside a column's option list.
pub fn validate_filters(data: &TableData, filters: &[Filter]) -> Result<Vec<Filter>, Rejection> {
    let mut out: Vec<Filter> = Vec::with_capacity(filters.len());
    for filter in filters {
        let column = data
            .column(&filter.column_id)
            .ok_or_else(|| Rejection::UnknownColumn(filter.column_id.clone()))?;
        if filter.value.is_empty() {
            continue;
        }
        if let Some(spec) = &column.filter {
            if !spec.accepts(&filter.value) {
                return Err(Rejection::InvalidFilterValue {
                    column_id: filter.column_id.clone(),
                    value: filter.value.clone(),
                });
            }
        }
        // Last value for a column wins.
        out.retain(|f| f.column_id != filter.column_id);
        out.push(filter.clone());
    }
    Ok(out)
}

/// # Errors
///
/// Unknown or unsortable sort columns.
pub fn validate_sort(data: &TableData, sort: Option<&SortSpec>) -> Result<Option<SortSpec>, Rejection> {
    let Some(spec) = sort else {
        return Ok(None);
    };
    match data.column(&spec.column_id) {
        None => Err(Rejection::UnknownColumn(spec.column_id.clone())),
        Some(column) if !column.is_sortable => Err(Rejection::UnsortableColumn(spec.column_id.clone())),
        Some(_) => Ok(Some(spec.clone())),
    }
}

fn require_row(data: &TableData, id: &str) -> Result<(), Rejection> {
    if data.contains_row(id) { Ok(()) } else { Err(Rejection::UnknownRow(id.to_owned())) }
}
