//! Dashboard editor state.
//!
//! DESIGN
//! ======
//! The editor owns one `DashboardJson` and the editing session around it:
//! which card is open in the side panel, which breakpoint preset the preview
//! uses, and the host hooks that observe or rewrite changes. Every mutation
//! is synchronous. Card operations that name an unknown id are ignored and
//! logged, the same way the table reducer treats bad actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the header, preview grid, and card form from the
//! accessors here and feeds user input back through the mutating methods.
//! The grid engine reports layout changes via [`DashboardEditor::change_layout`].

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::card::{self, CardConfig, CardType, DataItem, DataItemHook, TimeRange, TimeRangeHook};
use crate::config::validate_dashboard;
use crate::error::EditorError;
use crate::i18n::Messages;
use crate::layout::{self, Breakpoint, BreakpointSwitcher, LayoutItem, LayoutPreset, Layouts};

// =============================================================================
// TYPES
// =============================================================================

/// The document being edited.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardJson {
    pub cards: Vec<CardConfig>,
    pub layouts: Layouts,
}

impl DashboardJson {
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&CardConfig> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn card_index(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }
}

/// Actions a card's own toolbar raises.
#[derive(Clone, Debug, PartialEq)]
pub enum CardAction {
    Clone,
    Delete,
    /// JSON merge patch applied to the card.
    Change(Value),
}

/// Rewrites a changed card before it is stored.
pub type CardChangeHook = Box<dyn FnMut(CardConfig, &DashboardJson) -> CardConfig>;
/// Observes grid changes: the breakpoint's new layout and all layouts.
pub type LayoutChangeHook = Box<dyn FnMut(&[LayoutItem], &Layouts)>;
/// Host validation for submitted card JSON; returns error messages.
pub type ValidateHook = Box<dyn Fn(&CardConfig) -> Vec<String>>;
/// Host check on an imported dashboard; returns error messages.
pub type ImportHook = Box<dyn FnMut(&DashboardJson) -> Vec<String>>;

// =============================================================================
// EDITOR
// =============================================================================

pub struct DashboardEditor {
    title: String,
    dashboard: DashboardJson,
    messages: Messages,
    supported_card_types: Vec<CardType>,
    selected_card_id: Option<String>,
    preset: LayoutPreset,
    current_breakpoint: Breakpoint,
    switcher: Option<BreakpointSwitcher>,
    is_loading: bool,
    on_card_change: Option<CardChangeHook>,
    on_layout_change: Option<LayoutChangeHook>,
    on_validate: Option<ValidateHook>,
    on_import: Option<ImportHook>,
    data_items: Vec<DataItem>,
    data_item_hook: Option<Box<DataItemHook>>,
    time_range_hook: Option<Box<TimeRangeHook>>,
}

impl DashboardEditor {
    #[must_use]
    pub fn new(dashboard: DashboardJson) -> Self {
        Self {
            title: String::new(),
            dashboard,
            messages: Messages::default(),
            supported_card_types: CardType::ALL.to_vec(),
            selected_card_id: None,
            preset: LayoutPreset::FitToScreen,
            current_breakpoint: LayoutPreset::FitToScreen.breakpoint(),
            switcher: None,
            is_loading: false,
            on_card_change: None,
            on_layout_change: None,
            on_validate: None,
            on_import: None,
            data_items: Vec::new(),
            data_item_hook: None,
            time_range_hook: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Data items offered on every card when no data item hook is set.
    #[must_use]
    pub fn with_data_items(mut self, items: Vec<DataItem>) -> Self {
        self.data_items = items;
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn with_supported_card_types(mut self, types: Vec<CardType>) -> Self {
        self.supported_card_types = types;
        self
    }

    /// Enable the header breakpoint switcher, starting on its initial preset.
    #[must_use]
    pub fn with_breakpoint_switcher(mut self, switcher: BreakpointSwitcher) -> Self {
        let preset = switcher.initial.unwrap_or_default();
        self.preset = preset;
        self.current_breakpoint = preset.breakpoint();
        self.switcher = Some(switcher);
        self
    }

    #[must_use]
    pub fn on_card_change(mut self, hook: impl FnMut(CardConfig, &DashboardJson) -> CardConfig + 'static) -> Self {
        self.on_card_change = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_layout_change(mut self, hook: impl FnMut(&[LayoutItem], &Layouts) + 'static) -> Self {
        self.on_layout_change = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_validate(mut self, hook: impl Fn(&CardConfig) -> Vec<String> + 'static) -> Self {
        self.on_validate = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_import(mut self, hook: impl FnMut(&DashboardJson) -> Vec<String> + 'static) -> Self {
        self.on_import = Some(Box::new(hook));
        self
    }

    /// Overrides [`with_data_items`](Self::with_data_items) per card.
    #[must_use]
    pub fn on_valid_data_items(
        mut self,
        hook: impl Fn(&CardConfig, Option<TimeRange>) -> Vec<DataItem> + 'static,
    ) -> Self {
        self.data_item_hook = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_valid_time_ranges(mut self, hook: impl Fn(&CardConfig, &[String]) -> Vec<TimeRange> + 'static) -> Self {
        self.time_range_hook = Some(Box::new(hook));
        self
    }

    // --- Accessors ---

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn dashboard(&self) -> &DashboardJson {
        &self.dashboard
    }

    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    #[must_use]
    pub fn supported_card_types(&self) -> &[CardType] {
        &self.supported_card_types
    }

    #[must_use]
    pub fn selected_card_id(&self) -> Option<&str> {
        self.selected_card_id.as_deref()
    }

    /// The card open in the side panel; `None` shows the gallery.
    #[must_use]
    pub fn selected_card(&self) -> Option<&CardConfig> {
        self.selected_card_id.as_deref().and_then(|id| self.dashboard.card(id))
    }

    #[must_use]
    pub fn is_gallery_open(&self) -> bool {
        self.selected_card().is_none()
    }

    #[must_use]
    pub fn preset(&self) -> LayoutPreset {
        self.preset
    }

    #[must_use]
    pub fn current_breakpoint(&self) -> Breakpoint {
        self.current_breakpoint
    }

    /// Whether the preview scrolls at a fixed width.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        self.preset.is_overflow()
    }

    /// Breakpoint label above the preview. Only shown with the switcher
    /// enabled and a fixed-width preset selected.
    #[must_use]
    pub fn breakpoint_info(&self) -> Option<&str> {
        let enabled = self.switcher.is_some_and(|s| s.enabled);
        if enabled && self.preset.is_overflow() {
            Some(self.messages.layout_info(self.current_breakpoint))
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    // --- Cards ---

    /// Append a blank card and open it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnsupportedCardType`] when the editor was not
    /// configured to offer `card_type`.
    pub fn add_card(&mut self, card_type: CardType) -> Result<String, EditorError> {
        if !self.supported_card_types.contains(&card_type) {
            return Err(EditorError::UnsupportedCardType(card_type));
        }
        let card = card::default_card(card_type, &self.messages);
        let id = card.id.clone();
        debug!(card = %id, card_type = %card_type, "card added");
        self.dashboard.cards.push(card);
        self.selected_card_id = Some(id.clone());
        Ok(id)
    }

    /// Append a copy of card `id` under a new id and open it.
    pub fn duplicate_card(&mut self, id: &str) -> Option<String> {
        let Some(source) = self.dashboard.card(id) else {
            debug!(card = id, "duplicate ignored: unknown card");
            return None;
        };
        let copy = card::duplicate_card(source);
        let new_id = copy.id.clone();
        debug!(card = id, copy = %new_id, "card duplicated");
        self.dashboard.cards.push(copy);
        self.selected_card_id = Some(new_id.clone());
        Some(new_id)
    }

    /// Remove card `id` and its grid placements.
    pub fn remove_card(&mut self, id: &str) -> bool {
        let Some(index) = self.dashboard.card_index(id) else {
            debug!(card = id, "remove ignored: unknown card");
            return false;
        };
        self.dashboard.cards.remove(index);
        let placements = layout::remove_card(&mut self.dashboard.layouts, id);
        if self.selected_card_id.as_deref() == Some(id) {
            self.selected_card_id = None;
        }
        debug!(card = id, placements, "card removed");
        true
    }

    pub fn select_card(&mut self, id: &str) -> bool {
        if self.dashboard.card(id).is_none() {
            debug!(card = id, "select ignored: unknown card");
            return false;
        }
        self.selected_card_id = Some(id.to_owned());
        true
    }

    /// Close the card form and show the card gallery.
    pub fn show_gallery(&mut self) {
        self.selected_card_id = None;
    }

    /// Store an edited card, routed through the `on_card_change` hook.
    pub fn change_card(&mut self, card: CardConfig) -> bool {
        let Some(index) = self.dashboard.card_index(&card.id) else {
            debug!(card = %card.id, "change ignored: unknown card");
            return false;
        };
        let id = card.id.clone();
        let mut next = match self.on_card_change.as_mut() {
            Some(hook) => hook(card, &self.dashboard),
            None => card,
        };
        if next.id != id {
            warn!(card = %id, returned = %next.id, "card change hook changed the id; keeping the original");
            next.id = id;
        }
        self.dashboard.cards[index] = next;
        true
    }

    /// Handle an action raised from a card in the preview.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownCard`] for an unknown id and
    /// [`EditorError::Json`] when a patch leaves the card unreadable.
    pub fn apply_card_action(&mut self, id: &str, action: CardAction) -> Result<(), EditorError> {
        let Some(current) = self.dashboard.card(id) else {
            debug!(card = id, "card action ignored: unknown card");
            return Err(EditorError::UnknownCard(id.to_owned()));
        };
        match action {
            CardAction::Clone => {
                self.duplicate_card(id);
            }
            CardAction::Delete => {
                self.remove_card(id);
            }
            CardAction::Change(patch) => {
                let mut doc = serde_json::to_value(current)?;
                merge_patch(&mut doc, &patch);
                let mut updated: CardConfig = serde_json::from_value(doc)?;
                updated.id = id.to_owned();
                self.change_card(updated);
            }
        }
        Ok(())
    }

    // --- Card form ---

    /// Data items the card form offers for `card`.
    #[must_use]
    pub fn valid_data_items(&self, card: &CardConfig, selected_range: Option<TimeRange>) -> Vec<DataItem> {
        card::valid_data_items(card, selected_range, &self.data_items, self.data_item_hook.as_deref())
    }

    /// Time ranges the card form offers for `card`.
    #[must_use]
    pub fn valid_time_ranges(&self, card: &CardConfig, selected_items: &[String]) -> Vec<TimeRange> {
        card::valid_time_ranges(card, selected_items, self.time_range_hook.as_deref())
    }

    // --- Layout ---

    /// Store the grid's new layout for `breakpoint` and notify the host.
    pub fn change_layout(&mut self, breakpoint: Breakpoint, layout: Vec<LayoutItem>) {
        self.dashboard.layouts.insert(breakpoint, layout);
        if let Some(hook) = self.on_layout_change.as_mut() {
            let current = self.dashboard.layouts.get(&breakpoint).map_or(&[][..], Vec::as_slice);
            hook(current, &self.dashboard.layouts);
        }
    }

    /// The grid switched breakpoint on its own (window resize).
    pub fn change_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.current_breakpoint = breakpoint;
    }

    pub fn select_preset(&mut self, preset: LayoutPreset) {
        self.preset = preset;
        self.current_breakpoint = preset.breakpoint();
    }

    // --- JSON editor ---

    /// Parse and check card JSON from the code editor.
    ///
    /// # Errors
    ///
    /// [`EditorError::Json`] for unparsable input, [`EditorError::InvalidCard`]
    /// for schema errors, [`EditorError::Rejected`] when the host's
    /// `on_validate` hook reports problems.
    pub fn validate_card_json(&self, json: &str) -> Result<CardConfig, EditorError> {
        let card: CardConfig = serde_json::from_str(json)?;
        let errors = card::validate_card(&card);
        if !errors.is_empty() {
            return Err(EditorError::InvalidCard(errors));
        }
        if let Some(hook) = self.on_validate.as_ref() {
            let messages = hook(&card);
            if !messages.is_empty() {
                return Err(EditorError::Rejected(messages));
            }
        }
        Ok(card)
    }

    /// Validate card JSON and store it over the card with the same id.
    ///
    /// # Errors
    ///
    /// Any [`validate_card_json`](Self::validate_card_json) error, or
    /// [`EditorError::UnknownCard`] when no card has the submitted id.
    pub fn submit_card_json(&mut self, json: &str) -> Result<(), EditorError> {
        let card = match self.validate_card_json(json) {
            Ok(card) => card,
            Err(e) => {
                warn!(error = %e, "card JSON rejected");
                return Err(e);
            }
        };
        let id = card.id.clone();
        if self.change_card(card) { Ok(()) } else { Err(EditorError::UnknownCard(id)) }
    }

    /// Replace the whole dashboard with imported JSON. Selection is cleared.
    ///
    /// # Errors
    ///
    /// [`EditorError::Json`] for unparsable input,
    /// [`EditorError::InvalidDashboard`] for duplicate card ids or dangling
    /// layout items, [`EditorError::InvalidCard`] for the first card that
    /// breaks the card schema, [`EditorError::Rejected`] when the host's
    /// `on_import` hook reports problems.
    pub fn import(&mut self, json: &str) -> Result<(), EditorError> {
        let dashboard: DashboardJson = serde_json::from_str(json)?;
        validate_dashboard(&dashboard)?;
        if let Some(errors) = dashboard.cards.iter().map(card::validate_card).find(|e| !e.is_empty()) {
            return Err(EditorError::InvalidCard(errors));
        }
        if let Some(hook) = self.on_import.as_mut() {
            let messages = hook(&dashboard);
            if !messages.is_empty() {
                warn!(errors = messages.len(), "dashboard import rejected");
                return Err(EditorError::Rejected(messages));
            }
        }
        debug!(cards = dashboard.cards.len(), "dashboard imported");
        self.dashboard = dashboard;
        self.selected_card_id = None;
        Ok(())
    }

    // --- Output ---

    /// Serialize the dashboard for the host's export handler.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Json`] if serialization fails.
    pub fn export(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(&self.dashboard)?)
    }

    /// One preview per card. `render` may decline a card by returning `None`,
    /// in which case `fallback` draws the default preview.
    pub fn card_previews<T>(
        &self,
        mut render: impl FnMut(&CardConfig, bool) -> Option<T>,
        mut fallback: impl FnMut(&CardConfig, bool) -> T,
    ) -> Vec<T> {
        self.dashboard
            .cards
            .iter()
            .map(|card| {
                let is_selected = self.selected_card_id.as_deref() == Some(card.id.as_str());
                render(card, is_selected).unwrap_or_else(|| fallback(card, is_selected))
            })
            .collect()
    }
}

/// RFC 7386 JSON merge patch: objects merge recursively, `null` deletes a
/// key, anything else replaces the target.
fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(patch_map) = patch else {
        *target = patch.clone();
        return;
    };
    if !target.is_object() {
        *target = Value::Object(serde_json::Map::new());
    }
    if let Value::Object(target_map) = target {
        for (key, value) in patch_map {
            if value.is_null() {
                target_map.remove(key);
            } else {
                merge_patch(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}
