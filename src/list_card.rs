//! Infinite-scroll list card.
//!
//! The card asks the host for more items when the user scrolls to the
//! bottom. Only one request is in flight at a time: the card marks itself
//! loading when it calls `load_more` and clears the flag in [`ListCard::append`].

#[cfg(test)]
#[path = "list_card_test.rs"]
mod list_card_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sub-pixel scroll positions count as "at the bottom" within this margin.
const BOTTOM_TOLERANCE_PX: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Scroll geometry of the list's scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn is_at_bottom(&self) -> bool {
        (self.scroll_height - self.scroll_top - self.client_height).abs() <= BOTTOM_TOLERANCE_PX
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCard {
    pub id: String,
    pub title: String,
    #[serde(rename = "data")]
    pub items: Vec<ListItem>,
    pub is_loading: bool,
    pub has_more_data: bool,
}

impl ListCard {
    #[must_use]
    pub fn new(id: impl Into<String>, items: Vec<ListItem>, has_more_data: bool) -> Self {
        Self { id: id.into(), items, has_more_data, ..Self::default() }
    }

    /// Drives the card's empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn should_load_more(&self, metrics: &ScrollMetrics) -> bool {
        metrics.is_at_bottom() && self.has_more_data && !self.is_loading
    }

    /// Handle a scroll event. Calls `load_more` and marks the card loading
    /// when the list is scrolled to the bottom and more data exists.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics, load_more: impl FnOnce()) -> bool {
        if !self.should_load_more(metrics) {
            return false;
        }
        self.is_loading = true;
        debug!(card = %self.id, loaded = self.items.len(), "list card requested more items");
        load_more();
        true
    }

    /// Finish a load: append the page and record whether more remain.
    pub fn append(&mut self, items: impl IntoIterator<Item = ListItem>, has_more_data: bool) {
        self.items.extend(items);
        self.has_more_data = has_more_data;
        self.is_loading = false;
    }
}
