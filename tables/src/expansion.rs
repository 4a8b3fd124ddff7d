//! Row expansion tracker.
//!
//! Only membership lives here. Expansion content is owned by the host and
//! looked up per row id at render time.

#[cfg(test)]
#[path = "expansion_test.rs"]
mod expansion_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Host-supplied expansion content for one row. `C` is opaque to the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedContent<C> {
    pub row_id: String,
    pub content: C,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expansion {
    pub expanded_ids: BTreeSet<String>,
}

impl Expansion {
    #[must_use]
    pub fn is_expanded(&self, row_id: &str) -> bool {
        self.expanded_ids.contains(row_id)
    }

    pub fn toggle(&mut self, row_id: &str) {
        if !self.expanded_ids.remove(row_id) {
            self.expanded_ids.insert(row_id.to_owned());
        }
    }

    pub fn retain_in(&mut self, keep: &BTreeSet<&str>) {
        self.expanded_ids.retain(|id| keep.contains(id.as_str()));
    }

    /// Content for `row_id` when it is expanded and the host supplied some.
    #[must_use]
    pub fn content_for<'a, C>(&self, row_id: &str, content: &'a [ExpandedContent<C>]) -> Option<&'a C> {
        if !self.is_expanded(row_id) {
            return None;
        }
        content.iter().find(|c| c.row_id == row_id).map(|c| &c.content)
    }
}
