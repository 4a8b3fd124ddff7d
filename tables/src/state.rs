//! Table view-state: everything that determines what a table displays.
//!
//! DESIGN
//! ======
//! A `TableState` is an immutable value between transitions. The reducer
//! hands out `Arc<TableState>` and only allocates a new one when an action
//! actually changes something, so hosts can compare snapshots with
//! `Arc::ptr_eq`.

use serde::{Deserialize, Serialize};

use crate::expansion::Expansion;
use crate::filter::Filter;
use crate::ordering::ColumnOrdering;
use crate::pagination::Pagination;
use crate::selection::Selection;
use crate::sort::SortSpec;
use crate::toolbar::ToolbarState;

/// Which rows "select all" toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectAllScope {
    /// Only the rows on the current page.
    #[default]
    Page,
    /// Every row passing the active filters, across pages.
    Filtered,
}

/// What happens to selected/expanded ids whose rows drop out of the
/// post-filter set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StaleIdPolicy {
    /// Keep them; they reappear as selected if the row comes back.
    #[default]
    Retain,
    /// Drop them after every transition.
    Prune,
}

/// Feature switches and policies. Every feature is on unless the host turns
/// it off; actions for a disabled feature are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct TableOptions {
    pub has_filter: bool,
    pub has_search: bool,
    /// When false the derived view shows every post-filter row.
    pub has_pagination: bool,
    pub has_row_selection: bool,
    pub has_row_expansion: bool,
    pub has_row_actions: bool,
    pub has_column_selection: bool,
    pub select_all_scope: SelectAllScope,
    pub stale_ids: StaleIdPolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            has_filter: true,
            has_search: true,
            has_pagination: true,
            has_row_selection: true,
            has_row_expansion: true,
            has_row_actions: true,
            has_column_selection: true,
            select_all_scope: SelectAllScope::Page,
            stale_ids: StaleIdPolicy::Retain,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableState {
    pub filters: Vec<Filter>,
    pub toolbar: ToolbarState,
    pub sort: Option<SortSpec>,
    pub pagination: Pagination,
    pub selection: Selection,
    pub expansion: Expansion,
    pub ordering: Vec<ColumnOrdering>,
    pub is_loading: bool,
    pub options: TableOptions,
}
