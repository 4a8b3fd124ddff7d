//! Toolbar state: which bar is open and the current search text.

use serde::{Deserialize, Serialize};

/// Secondary bar opened beneath the table toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveBar {
    Filter,
    ColumnSelection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarState {
    #[serde(default)]
    pub active_bar: Option<ActiveBar>,
    #[serde(default)]
    pub search: String,
}

impl ToolbarState {
    /// Open `bar`, or close it when it is already open.
    #[must_use]
    pub fn toggled(&self, bar: ActiveBar) -> Option<ActiveBar> {
        if self.active_bar == Some(bar) { None } else { Some(bar) }
    }
}
