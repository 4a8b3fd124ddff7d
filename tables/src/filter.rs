//! Filter evaluator: column filters plus toolbar search.
//!
//! Column filters are case-sensitive substring tests against the cell's
//! rendered string. Matching is lexical: filtering `"2"` on a date column
//! matches every date string containing a `2`.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::{Deserialize, Serialize};

use crate::model::Row;

/// One active column filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub column_id: String,
    pub value: String,
}

impl Filter {
    #[must_use]
    pub fn new(column_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self { column_id: column_id.into(), value: value.into() }
    }
}

/// Whether `row` satisfies every filter. An empty set always matches; a
/// missing cell never matches a filter on its column.
#[must_use]
pub fn matches(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| {
        row.value(&filter.column_id)
            .is_some_and(|value| value.to_string().contains(filter.value.as_str()))
    })
}

/// Case-insensitive search across every cell of the row.
#[must_use]
pub fn matches_search(row: &Row, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    row.values.values().any(|value| value.to_string().to_lowercase().contains(&needle))
}

/// Rows passing both the column filters and the search, in original order.
#[must_use]
pub fn filter_rows<'a>(rows: impl IntoIterator<Item = &'a Row>, filters: &[Filter], search: &str) -> Vec<&'a Row> {
    rows.into_iter()
        .filter(|row| matches(row, filters) && matches_search(row, search))
        .collect()
}
