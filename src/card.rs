//! Card model: types, sizes, grid dimensions, and card configs.
//!
//! DESIGN
//! ======
//! `content` stays a free-form JSON object. Each card type renders it
//! differently and the editor only needs to clone, patch, and validate it.
//! Sizes and types are closed enums so the allowed-size table is checked by
//! the compiler.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::error::CardError;
use crate::i18n::{CardFormMessages, Messages};
use crate::layout::Breakpoint;

// =============================================================================
// TYPES AND SIZES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Value,
    TimeSeries,
    Bar,
    Table,
    Image,
    List,
}

impl CardType {
    pub const ALL: [Self; 6] = [Self::Value, Self::TimeSeries, Self::Bar, Self::Table, Self::Image, Self::List];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Value => "VALUE",
            Self::TimeSeries => "TIMESERIES",
            Self::Bar => "BAR",
            Self::Table => "TABLE",
            Self::Image => "IMAGE",
            Self::List => "LIST",
        }
    }

    /// Sizes offered in the card form's size dropdown.
    #[must_use]
    pub fn allowed_sizes(self) -> &'static [CardSize] {
        use CardSize as S;
        match self {
            Self::Value => &[S::Small, S::SmallWide, S::MediumThin, S::Medium, S::MediumWide],
            Self::TimeSeries => &[S::Medium, S::MediumWide, S::Large, S::LargeWide],
            Self::Bar => &[S::Medium, S::MediumWide, S::Large, S::LargeThin, S::LargeWide],
            Self::Table => &[S::MediumWide, S::Large, S::LargeWide],
            Self::Image => &[S::MediumThin, S::Medium, S::MediumWide, S::LargeThin, S::Large, S::LargeWide],
            Self::List => &[S::MediumThin, S::Medium, S::LargeThin, S::Large],
        }
    }

    /// Size a freshly added card starts with.
    #[must_use]
    pub fn default_size(self) -> CardSize {
        match self {
            Self::Value => CardSize::Small,
            Self::TimeSeries | Self::Bar | Self::Image => CardSize::Medium,
            Self::Table => CardSize::Large,
            Self::List => CardSize::MediumThin,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardSize {
    Small,
    SmallWide,
    Medium,
    MediumThin,
    MediumWide,
    Large,
    LargeThin,
    LargeWide,
}

/// Grid cells a card spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub w: u32,
    pub h: u32,
}

impl CardSize {
    pub const ALL: [Self; 8] = [
        Self::Small,
        Self::SmallWide,
        Self::Medium,
        Self::MediumThin,
        Self::MediumWide,
        Self::Large,
        Self::LargeThin,
        Self::LargeWide,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::SmallWide => "SMALLWIDE",
            Self::Medium => "MEDIUM",
            Self::MediumThin => "MEDIUMTHIN",
            Self::MediumWide => "MEDIUMWIDE",
            Self::Large => "LARGE",
            Self::LargeThin => "LARGETHIN",
            Self::LargeWide => "LARGEWIDE",
        }
    }

    /// Grid span at `breakpoint`. Widths are capped at the breakpoint's
    /// column count.
    #[must_use]
    pub fn dimensions(self, breakpoint: Breakpoint) -> Dimensions {
        let (w, h) = match self {
            Self::Small => (4, 1),
            Self::SmallWide => (8, 1),
            Self::Medium => (8, 2),
            Self::MediumThin => (4, 2),
            Self::MediumWide => (16, 2),
            Self::Large => (8, 4),
            Self::LargeThin => (4, 4),
            Self::LargeWide => (16, 4),
        };
        Dimensions { w: w.min(breakpoint.columns()), h }
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dropdown label for a size, e.g. `"Medium (8x2)"`.
#[must_use]
pub fn card_size_text(size: CardSize, messages: &CardFormMessages) -> String {
    let dims = size.dimensions(Breakpoint::Lg);
    format!("{} ({}x{})", messages.card_size(size), dims.w, dims.h)
}

/// `(size, label)` pairs for a card type's size dropdown.
#[must_use]
pub fn size_options(card_type: CardType, messages: &CardFormMessages) -> Vec<(CardSize, String)> {
    card_type.allowed_sizes().iter().map(|&size| (size, card_size_text(size, messages))).collect()
}

// =============================================================================
// CARD CONFIG
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub size: CardSize,
    #[serde(rename = "type")]
    pub card_type: CardType,
    #[serde(default = "empty_object")]
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn new_card_id() -> String {
    Uuid::new_v4().to_string()
}

/// A blank card of `card_type` with a fresh id.
#[must_use]
pub fn default_card(card_type: CardType, messages: &Messages) -> CardConfig {
    let (content, interval, show_legend) = match card_type {
        CardType::Value => (json!({ "attributes": [] }), None, None),
        CardType::TimeSeries => (
            json!({
                "series": [],
                "xLabel": "Time",
                "yLabel": "",
                "includeZeroOnXaxis": true,
                "includeZeroOnYaxis": true,
                "timeDataSourceId": "timestamp"
            }),
            Some("day".to_owned()),
            Some(true),
        ),
        CardType::Bar => (json!({ "type": "SIMPLE", "layout": "VERTICAL", "series": [] }), Some("day".to_owned()), None),
        CardType::Table => (json!({ "columns": [] }), None, None),
        CardType::Image => (json!({}), None, None),
        CardType::List => (json!({ "data": [] }), None, None),
    };
    CardConfig {
        id: new_card_id(),
        title: messages.default_card_title.clone(),
        description: None,
        size: card_type.default_size(),
        card_type,
        content,
        data_source: None,
        interval,
        show_legend,
    }
}

/// Copy of `card` under a fresh id.
#[must_use]
pub fn duplicate_card(card: &CardConfig) -> CardConfig {
    CardConfig { id: new_card_id(), ..card.clone() }
}

/// Schema errors in `card`; empty when the card is valid.
#[must_use]
pub fn validate_card(card: &CardConfig) -> Vec<CardError> {
    let mut errors = Vec::new();
    if card.id.trim().is_empty() {
        errors.push(CardError::EmptyId);
    }
    if !card.card_type.allowed_sizes().contains(&card.size) {
        errors.push(CardError::SizeNotAllowed { card_type: card.card_type, size: card.size });
    }
    if !card.content.is_object() {
        errors.push(CardError::ContentNotObject);
    }
    errors
}

// =============================================================================
// TIME RANGES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    Last24Hours,
    Last7Days,
    LastMonth,
    LastQuarter,
    LastYear,
    ThisWeek,
    ThisMonth,
    ThisQuarter,
    ThisYear,
}

/// How far back a range reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeKind {
    /// Counted back from now.
    Rolling,
    /// From the start of the current period.
    PeriodToDate,
}

/// The `dataSource.range` a time range writes into a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RangeSpec {
    pub interval: &'static str,
    pub count: i32,
    #[serde(rename = "type")]
    pub kind: RangeKind,
}

impl TimeRange {
    pub const ALL: [Self; 9] = [
        Self::Last24Hours,
        Self::Last7Days,
        Self::LastMonth,
        Self::LastQuarter,
        Self::LastYear,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::ThisQuarter,
        Self::ThisYear,
    ];

    /// Range spec and the aggregation interval shown for it.
    #[must_use]
    pub fn spec(self) -> (RangeSpec, &'static str) {
        let (interval, kind, grain) = match self {
            Self::Last24Hours => ("day", RangeKind::Rolling, "hour"),
            Self::Last7Days => ("week", RangeKind::Rolling, "day"),
            Self::LastMonth => ("month", RangeKind::Rolling, "day"),
            Self::LastQuarter => ("quarter", RangeKind::Rolling, "week"),
            Self::LastYear => ("year", RangeKind::Rolling, "month"),
            Self::ThisWeek => ("week", RangeKind::PeriodToDate, "day"),
            Self::ThisMonth => ("month", RangeKind::PeriodToDate, "day"),
            Self::ThisQuarter => ("quarter", RangeKind::PeriodToDate, "week"),
            Self::ThisYear => ("year", RangeKind::PeriodToDate, "month"),
        };
        (RangeSpec { interval, count: -1, kind }, grain)
    }
}

#[must_use]
pub fn default_time_ranges() -> Vec<TimeRange> {
    TimeRange::ALL.to_vec()
}

/// Host hook choosing the time ranges a card may use given the data items
/// currently selected in the form.
pub type TimeRangeHook = dyn Fn(&CardConfig, &[String]) -> Vec<TimeRange>;

#[must_use]
pub fn valid_time_ranges(card: &CardConfig, selected_items: &[String], hook: Option<&TimeRangeHook>) -> Vec<TimeRange> {
    match hook {
        Some(hook) => hook(card, selected_items),
        None => default_time_ranges(),
    }
}

/// A data source a card can plot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    pub data_source_id: String,
    #[serde(default)]
    pub label: String,
}

/// Host hook choosing the data items a card may use given the time range
/// currently selected in the form.
pub type DataItemHook = dyn Fn(&CardConfig, Option<TimeRange>) -> Vec<DataItem>;

/// The hook's answer when there is one, otherwise the static `items` list.
#[must_use]
pub fn valid_data_items(
    card: &CardConfig,
    selected_range: Option<TimeRange>,
    items: &[DataItem],
    hook: Option<&DataItemHook>,
) -> Vec<DataItem> {
    match hook {
        Some(hook) => hook(card, selected_range),
        None => items.to_vec(),
    }
}

/// `card` with `range` applied: sets the interval and `dataSource.range`,
/// keeping any other data source keys.
#[must_use]
pub fn with_time_range(card: &CardConfig, range: TimeRange) -> CardConfig {
    let (spec, grain) = range.spec();
    let mut data_source = match &card.data_source {
        Some(Value::Object(map)) => map.clone(),
        _ => serde_json::Map::new(),
    };
    data_source.insert(
        "range".into(),
        json!({
            "interval": spec.interval,
            "count": spec.count,
            "type": spec.kind
        }),
    );
    CardConfig { interval: Some(grain.to_owned()), data_source: Some(Value::Object(data_source)), ..card.clone() }
}
