//! Initial props parsed from JSON.
//!
//! DESIGN
//! ======
//! Hosts hand over table and dashboard props as JSON. Parsing is followed by
//! an explicit check of the cross-references serde cannot see (unique ids,
//! filters and sorts naming real columns, layouts naming real cards). After
//! this boundary the rest of the crate trusts its inputs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeSet;

use serde::Deserialize;
use tables::expansion::Expansion;
use tables::filter::Filter;
use tables::ordering::ColumnOrdering;
use tables::pagination::Pagination;
use tables::reducer::{validate_filters, validate_sort};
use tables::selection::Selection;
use tables::sort::SortSpec;
use tables::toolbar::{ActiveBar, ToolbarState};
use tables::{BatchAction, Column, Row, StatefulTable, TableData, TableOptions, TableState};

use crate::card::CardType;
use crate::editor::{DashboardEditor, DashboardJson};
use crate::error::ConfigError;
use crate::i18n::Messages;
use crate::layout::BreakpointSwitcher;

// =============================================================================
// TABLE
// =============================================================================

/// View-state a table starts from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InitialView {
    pub filters: Vec<Filter>,
    pub search: String,
    pub active_bar: Option<ActiveBar>,
    pub sort: Option<SortSpec>,
    pub pagination: Option<Pagination>,
    pub selected_ids: Vec<String>,
    pub expanded_ids: Vec<String>,
    pub ordering: Vec<ColumnOrdering>,
    pub is_loading: bool,
    /// Actions offered in the batch-action bar.
    pub batch_actions: Vec<BatchAction>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableConfig {
    #[serde(default)]
    pub id: String,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub data: Vec<Row>,
    #[serde(default)]
    pub options: TableOptions,
    #[serde(default)]
    pub view: InitialView,
}

impl TableConfig {
    /// Parse and check table props.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed JSON, otherwise the first
    /// consistency problem found.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ids, column and row references, and the initial view.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate id, unknown column or row reference,
    /// filter or sort the reducer would refuse, or zero page or page size
    /// found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut columns = BTreeSet::new();
        for column in &self.columns {
            if !columns.insert(column.id.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.id.clone()));
            }
        }
        let mut rows = BTreeSet::new();
        for row in &self.data {
            if !rows.insert(row.id.as_str()) {
                return Err(ConfigError::DuplicateRow(row.id.clone()));
            }
        }

        let known = |column_id: &str, context: &'static str| {
            if columns.contains(column_id) {
                Ok(())
            } else {
                Err(ConfigError::UnknownColumn { column_id: column_id.to_owned(), context })
            }
        };
        for filter in &self.view.filters {
            known(&filter.column_id, "filter")?;
        }
        if let Some(sort) = &self.view.sort {
            known(&sort.column_id, "sort")?;
        }
        for entry in &self.view.ordering {
            known(&entry.column_id, "ordering")?;
        }

        let known_row = |row_id: &String, context: &'static str| {
            if rows.contains(row_id.as_str()) {
                Ok(())
            } else {
                Err(ConfigError::UnknownRow { row_id: row_id.clone(), context })
            }
        };
        for id in &self.view.selected_ids {
            known_row(id, "selection")?;
        }
        for id in &self.view.expanded_ids {
            known_row(id, "expansion")?;
        }

        // Same payload checks the reducer applies to APPLY_FILTER and CHANGE_SORT.
        let schema = TableData::new(self.columns.clone(), Vec::new());
        validate_filters(&schema, &self.view.filters)?;
        validate_sort(&schema, self.view.sort.as_ref())?;

        if let Some(pagination) = &self.view.pagination {
            if pagination.page == 0 {
                return Err(ConfigError::ZeroPage);
            }
            if pagination.page_size == 0 || pagination.page_sizes.contains(&0) {
                return Err(ConfigError::ZeroPageSize);
            }
        }
        Ok(())
    }

    /// The view-state described by `view` and `options`, before totals are
    /// computed.
    #[must_use]
    pub fn initial_state(&self) -> TableState {
        let view = &self.view;
        TableState {
            filters: view.filters.clone(),
            toolbar: ToolbarState { active_bar: view.active_bar, search: view.search.clone() },
            sort: view.sort.clone(),
            pagination: view.pagination.clone().unwrap_or_default(),
            selection: Selection { selected_ids: view.selected_ids.iter().cloned().collect() },
            expansion: Expansion { expanded_ids: view.expanded_ids.iter().cloned().collect() },
            ordering: view.ordering.clone(),
            is_loading: view.is_loading,
            options: self.options,
        }
    }

    /// Build the table; totals and page are settled against `data`.
    #[must_use]
    pub fn into_table(self) -> StatefulTable {
        let state = self.initial_state();
        let data = TableData::new(self.columns, self.data).with_batch_actions(self.view.batch_actions);
        StatefulTable::new(data, state)
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub title: String,
    #[serde(rename = "initialValue")]
    pub dashboard: DashboardJson,
    pub supported_card_types: Option<Vec<CardType>>,
    pub breakpoint_switcher: Option<BreakpointSwitcher>,
    pub i18n: Messages,
}

impl DashboardConfig {
    /// Parse and check dashboard editor props.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed JSON, [`ConfigError::DuplicateCard`]
    /// or [`ConfigError::UnknownLayoutCard`] for inconsistent dashboards.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        validate_dashboard(&config.dashboard)?;
        Ok(config)
    }

    #[must_use]
    pub fn into_editor(self) -> DashboardEditor {
        let mut editor = DashboardEditor::new(self.dashboard).with_title(self.title).with_messages(self.i18n);
        if let Some(types) = self.supported_card_types {
            editor = editor.with_supported_card_types(types);
        }
        if let Some(switcher) = self.breakpoint_switcher {
            editor = editor.with_breakpoint_switcher(switcher);
        }
        editor
    }
}

/// Card ids are unique and every layout item names a card.
///
/// # Errors
///
/// Returns the first duplicate card id or dangling layout item.
pub fn validate_dashboard(dashboard: &DashboardJson) -> Result<(), ConfigError> {
    let mut ids = BTreeSet::new();
    for card in &dashboard.cards {
        if !ids.insert(card.id.as_str()) {
            return Err(ConfigError::DuplicateCard(card.id.clone()));
        }
    }
    for (&breakpoint, items) in &dashboard.layouts {
        if let Some(item) = items.iter().find(|item| !ids.contains(item.i.as_str())) {
            return Err(ConfigError::UnknownLayoutCard { breakpoint, card_id: item.i.clone() });
        }
    }
    Ok(())
}
