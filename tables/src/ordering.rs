//! Column display order and visibility, independent of sort.

#[cfg(test)]
#[path = "ordering_test.rs"]
mod ordering_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::Column;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOrdering {
    pub column_id: String,
    #[serde(default)]
    pub is_hidden: bool,
}

impl ColumnOrdering {
    #[must_use]
    pub fn visible(column_id: impl Into<String>) -> Self {
        Self { column_id: column_id.into(), is_hidden: false }
    }

    #[must_use]
    pub fn hidden(column_id: impl Into<String>) -> Self {
        Self { column_id: column_id.into(), is_hidden: true }
    }
}

/// Ordering that shows every column in dataset order.
#[must_use]
pub fn default_ordering(columns: &[Column]) -> Vec<ColumnOrdering> {
    columns.iter().map(|c| ColumnOrdering::visible(c.id.clone())).collect()
}

/// Whether `ordering` references only known columns, each at most once.
#[must_use]
pub fn is_valid_ordering(columns: &[Column], ordering: &[ColumnOrdering]) -> bool {
    let mut seen = BTreeSet::new();
    ordering
        .iter()
        .all(|entry| columns.iter().any(|c| c.id == entry.column_id) && seen.insert(entry.column_id.as_str()))
}

/// Columns to render, in ordering order, skipping hidden ones. Columns the
/// ordering does not mention are appended in dataset order.
#[must_use]
pub fn visible_columns<'a>(columns: &'a [Column], ordering: &[ColumnOrdering]) -> Vec<&'a Column> {
    let mut out: Vec<&Column> = ordering
        .iter()
        .filter(|entry| !entry.is_hidden)
        .filter_map(|entry| columns.iter().find(|c| c.id == entry.column_id))
        .collect();
    out.extend(
        columns
            .iter()
            .filter(|c| !ordering.iter().any(|entry| entry.column_id == c.id)),
    );
    out
}

/// Copy of `ordering` with `column_id`'s visibility flipped. Unknown ids
/// return an unchanged copy.
#[must_use]
pub fn toggle_hidden(ordering: &[ColumnOrdering], column_id: &str) -> Vec<ColumnOrdering> {
    ordering
        .iter()
        .map(|entry| {
            if entry.column_id == column_id {
                ColumnOrdering { column_id: entry.column_id.clone(), is_hidden: !entry.is_hidden }
            } else {
                entry.clone()
            }
        })
        .collect()
}
