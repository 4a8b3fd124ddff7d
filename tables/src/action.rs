//! Discrete events a host dispatches into the table reducer.

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::ordering::ColumnOrdering;
use crate::sort::SortSpec;
use crate::toolbar::ActiveBar;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableAction {
    /// Replace the active filter set. Empty values are dropped.
    ApplyFilter(Vec<Filter>),
    ClearFilters,
    /// `None` returns to the original row order.
    ChangeSort(Option<SortSpec>),
    /// 1-indexed; pages past the end clamp to the last page.
    ChangePage(usize),
    ChangePageSize(usize),
    ToggleRowSelected(String),
    ToggleSelectAll,
    ToggleRowExpanded(String),
    ChangeOrdering(Vec<ColumnOrdering>),
    SetLoading(bool),
    ApplySearch(String),
    ToggleToolbar(ActiveBar),
    /// Dismiss the batch-action bar, clearing the selection.
    CancelBatchAction,
    /// The host replaced the dataset; recompute totals.
    DataChanged,
    /// Run a batch action over the current selection.
    ApplyBatchAction(String),
    /// Run one of a row's own actions.
    #[serde(rename_all = "camelCase")]
    ApplyRowAction { row_id: String, action_id: String },
}

impl TableAction {
    /// Stable name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApplyFilter(_) => "APPLY_FILTER",
            Self::ClearFilters => "CLEAR_FILTERS",
            Self::ChangeSort(_) => "CHANGE_SORT",
            Self::ChangePage(_) => "CHANGE_PAGE",
            Self::ChangePageSize(_) => "CHANGE_PAGE_SIZE",
            Self::ToggleRowSelected(_) => "TOGGLE_ROW_SELECTED",
            Self::ToggleSelectAll => "TOGGLE_SELECT_ALL",
            Self::ToggleRowExpanded(_) => "TOGGLE_ROW_EXPANDED",
            Self::ChangeOrdering(_) => "CHANGE_ORDERING",
            Self::SetLoading(_) => "SET_LOADING",
            Self::ApplySearch(_) => "APPLY_SEARCH",
            Self::ToggleToolbar(_) => "TOGGLE_TOOLBAR",
            Self::CancelBatchAction => "CANCEL_BATCH_ACTION",
            Self::DataChanged => "DATA_CHANGED",
            Self::ApplyBatchAction(_) => "APPLY_BATCH_ACTION",
            Self::ApplyRowAction { .. } => "APPLY_ROW_ACTION",
        }
    }

    /// Host events: validated and forwarded to the listener, but they leave
    /// the view-state as it is.
    #[must_use]
    pub fn is_event(&self) -> bool {
        matches!(self, Self::ApplyBatchAction(_) | Self::ApplyRowAction { .. })
    }
}
