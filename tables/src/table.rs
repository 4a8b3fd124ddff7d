//! Stateful table: one dataset, one view-state, one dispatch point.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::sync::Arc;

use tracing::debug;

use crate::action::TableAction;
use crate::model::TableData;
use crate::reducer::{reduce, settle, try_reduce};
use crate::state::TableState;
use crate::view::{TableView, derive_view};

/// Host callback run after every accepted action.
pub type ActionListener = Box<dyn FnMut(&TableAction, &TableState)>;

/// Owns a dataset and its view-state. All transitions go through
/// [`StatefulTable::dispatch`], one at a time.
pub struct StatefulTable {
    data: TableData,
    state: Arc<TableState>,
    listener: Option<ActionListener>,
}

impl StatefulTable {
    /// Build a table; `state` totals are recomputed against `data`.
    #[must_use]
    pub fn new(data: TableData, state: TableState) -> Self {
        let state = Arc::new(settle(state, &data));
        Self { data, state, listener: None }
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&TableAction, &TableState) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Run `action` through the reducer. Returns whether the state changed,
    /// or for host events ([`TableAction::is_event`]) whether the event was
    /// accepted and delivered to the listener.
    pub fn dispatch(&mut self, action: TableAction) -> bool {
        if action.is_event() {
            return self.emit(&action);
        }
        let next = reduce(&self.state, &self.data, &action);
        if Arc::ptr_eq(&next, &self.state) {
            return false;
        }
        self.state = next;
        if let Some(listener) = self.listener.as_mut() {
            listener(&action, self.state.as_ref());
        }
        true
    }

    fn emit(&mut self, action: &TableAction) -> bool {
        if let Err(reason) = try_reduce(&self.state, &self.data, action) {
            debug!(action = action.kind(), %reason, "table event ignored");
            return false;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener(action, self.state.as_ref());
        }
        true
    }

    /// Replace the dataset and recompute totals.
    pub fn set_data(&mut self, data: TableData) {
        self.data = data;
        self.dispatch(TableAction::DataChanged);
    }

    #[must_use]
    pub fn state(&self) -> &Arc<TableState> {
        &self.state
    }

    #[must_use]
    pub fn data(&self) -> &TableData {
        &self.data
    }

    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        derive_view(&self.state, &self.data)
    }
}
