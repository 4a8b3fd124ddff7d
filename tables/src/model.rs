//! Dataset model: rows, columns, and cell values.
//!
//! DESIGN
//! ======
//! Dates travel as ISO-8601 strings inside [`CellValue::Text`]; the view-state
//! core never parses them. Filtering and string sorting operate on the
//! rendered form produced by `Display`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Numeric payload, if this cell holds a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// Per-row action rendered in the row's action menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    pub id: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub label_text: String,
    /// Rendered inside the overflow menu instead of inline.
    #[serde(default)]
    pub is_overflow: bool,
}

/// One table row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Unique within a dataset.
    pub id: String,
    pub values: BTreeMap<String, CellValue>,
    #[serde(default)]
    pub row_actions: Vec<RowAction>,
}

impl Row {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), values: BTreeMap::new(), row_actions: Vec::new() }
    }

    /// Builder-style cell insert.
    #[must_use]
    pub fn with_value(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.values.insert(column_id.into(), value.into());
        self
    }

    #[must_use]
    pub fn value(&self, column_id: &str) -> Option<&CellValue> {
        self.values.get(column_id)
    }

    #[must_use]
    pub fn row_action(&self, action_id: &str) -> Option<&RowAction> {
        self.row_actions.iter().find(|a| a.id == action_id)
    }
}

/// Action offered in the batch-action bar while rows are selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAction {
    pub id: String,
    pub label_text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Fixed option for enumerated column filters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub text: String,
}

/// Filter affordance declared by a column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFilter {
    #[serde(default)]
    pub placeholder_text: Option<String>,
    /// When non-empty, filter values must be one of these option ids.
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

impl ColumnFilter {
    /// Whether `value` is acceptable for this filter.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.options.is_empty() || self.options.iter().any(|o| o.id == value)
    }
}

/// Column definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique within a dataset.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_sortable: bool,
    #[serde(default)]
    pub filter: Option<ColumnFilter>,
}

impl Column {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), is_sortable: false, filter: None }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.is_sortable = true;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: ColumnFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// The raw dataset a table renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub batch_actions: Vec<BatchAction>,
}

impl TableData {
    #[must_use]
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows, batch_actions: Vec::new() }
    }

    #[must_use]
    pub fn with_batch_actions(mut self, batch_actions: Vec<BatchAction>) -> Self {
        self.batch_actions = batch_actions;
        self
    }

    #[must_use]
    pub fn batch_action(&self, id: &str) -> Option<&BatchAction> {
        self.batch_actions.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn contains_row(&self, id: &str) -> bool {
        self.row(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
