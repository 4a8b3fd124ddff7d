//! Dashboard grid layouts and the editor's breakpoint presets.
//!
//! The grid engine itself lives in the host. This module only names the
//! breakpoints the editor supports and stores the per-breakpoint card
//! placements it reports back.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// BREAKPOINTS
// =============================================================================

/// Grid breakpoints the dashboard editor lays cards out for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xl,
    Lg,
    Md,
}

impl Breakpoint {
    pub const ALL: [Self; 3] = [Self::Xl, Self::Lg, Self::Md];

    /// Number of grid columns at this breakpoint.
    #[must_use]
    pub fn columns(self) -> u32 {
        match self {
            Self::Xl | Self::Lg => 16,
            Self::Md => 8,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xl => "xl",
            Self::Lg => "lg",
            Self::Md => "md",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// LAYOUTS
// =============================================================================

/// Placement of one card on the grid. `i` is the card id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

pub type Layouts = BTreeMap<Breakpoint, Vec<LayoutItem>>;

/// Remove every placement of `card_id`. Returns how many were removed.
pub fn remove_card(layouts: &mut Layouts, card_id: &str) -> usize {
    let mut removed = 0;
    for items in layouts.values_mut() {
        let before = items.len();
        items.retain(|item| item.i != card_id);
        removed += before - items.len();
    }
    removed
}

// =============================================================================
// PRESETS
// =============================================================================

/// Header view switcher entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPreset {
    #[default]
    FitToScreen,
    #[serde(rename = "XLARGE")]
    XLarge,
    Large,
    Medium,
}

impl LayoutPreset {
    pub const ALL: [Self; 4] = [Self::FitToScreen, Self::XLarge, Self::Large, Self::Medium];

    #[must_use]
    pub fn breakpoint(self) -> Breakpoint {
        match self {
            Self::FitToScreen | Self::XLarge => Breakpoint::Xl,
            Self::Large => Breakpoint::Lg,
            Self::Medium => Breakpoint::Md,
        }
    }

    /// Position in the header switcher.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::FitToScreen => 0,
            Self::XLarge => 1,
            Self::Large => 2,
            Self::Medium => 3,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.index() == index)
    }

    /// A fixed-width preview scrolls instead of fitting the screen.
    #[must_use]
    pub fn is_overflow(self) -> bool {
        self != Self::FitToScreen
    }
}

/// Manual breakpoint switcher shown in the editor header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakpointSwitcher {
    pub enabled: bool,
    #[serde(rename = "initialValue")]
    pub initial: Option<LayoutPreset>,
}
