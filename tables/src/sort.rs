//! Sort comparator.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{CellValue, Row};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The other direction. Header clicks cycle through this.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort. `None` at the state level means original order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self { column_id: column_id.into(), direction: SortDirection::Ascending }
    }

    #[must_use]
    pub fn descending(column_id: impl Into<String>) -> Self {
        Self { column_id: column_id.into(), direction: SortDirection::Descending }
    }
}

/// Compare two cells: numerically when both are numbers, otherwise by their
/// rendered strings. Missing cells order first.
#[must_use]
pub fn compare_values(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(CellValue::Number(x)), Some(CellValue::Number(y))) => x.total_cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

/// Compare two rows on `column_id` in `direction`.
#[must_use]
pub fn compare(a: &Row, b: &Row, column_id: &str, direction: SortDirection) -> Ordering {
    let ordering = compare_values(a.value(column_id), b.value(column_id));
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable sort in place. `None` leaves the input order untouched.
pub fn sort_rows(rows: &mut [&Row], sort: Option<&SortSpec>) {
    if let Some(spec) = sort {
        rows.sort_by(|a, b| compare(a, b, &spec.column_id, spec.direction));
    }
}
