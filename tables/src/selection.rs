//! Row selection tracker and the derived "select all" tri-state.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Header checkbox state. Derived from the selected set and a row scope on
/// every read; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectAllState {
    #[default]
    None,
    Indeterminate,
    All,
}

impl SelectAllState {
    #[must_use]
    pub fn is_all_selected(self) -> bool {
        self == Self::All
    }

    #[must_use]
    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }
}

/// Selected row ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub selected_ids: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Insert `id` if absent, remove it if present.
    pub fn toggle_row(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_owned());
        }
    }

    /// Toggle the whole `scope`: select every id when any is unselected,
    /// otherwise deselect them all. Ids outside `scope` are left alone.
    pub fn select_all<'a>(&mut self, scope: impl IntoIterator<Item = &'a str> + Clone) {
        let all_selected = scope.clone().into_iter().all(|id| self.selected_ids.contains(id));
        if all_selected {
            for id in scope {
                self.selected_ids.remove(id);
            }
        } else {
            self.selected_ids.extend(scope.into_iter().map(str::to_owned));
        }
    }

    pub fn clear(&mut self) {
        self.selected_ids.clear();
    }

    /// How many ids in `scope` are selected.
    #[must_use]
    pub fn count_in<'a>(&self, scope: impl IntoIterator<Item = &'a str>) -> usize {
        scope.into_iter().filter(|id| self.selected_ids.contains(*id)).count()
    }

    /// Tri-state over `scope`. An empty scope is never "all selected".
    #[must_use]
    pub fn select_all_state<'a>(&self, scope: impl IntoIterator<Item = &'a str>) -> SelectAllState {
        let mut total = 0usize;
        let mut selected = 0usize;
        for id in scope {
            total += 1;
            if self.selected_ids.contains(id) {
                selected += 1;
            }
        }
        if selected == 0 {
            SelectAllState::None
        } else if selected < total {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::All
        }
    }

    /// Drop ids not in `keep`.
    pub fn retain_in(&mut self, keep: &BTreeSet<&str>) {
        self.selected_ids.retain(|id| keep.contains(id.as_str()));
    }
}
