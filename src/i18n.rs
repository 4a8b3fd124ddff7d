//! Typed UI strings.
//!
//! Hosts override any subset of strings with a partial JSON object; keys
//! that are not set keep their English default, unknown keys are rejected.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::{Deserialize, Serialize};

use crate::card::{CardSize, TimeRange};
use crate::error::ConfigError;
use crate::layout::{Breakpoint, LayoutPreset};

// =============================================================================
// DASHBOARD EDITOR
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Messages {
    pub header_edit_title_button: String,
    pub header_import_button: String,
    pub header_export_button: String,
    pub header_delete_button: String,
    pub header_cancel_button: String,
    pub header_submit_button: String,
    pub header_fit_to_screen_button: String,
    pub header_xlarge_button: String,
    pub header_large_button: String,
    pub header_medium_button: String,
    pub gallery_header: String,
    pub open_gallery_button: String,
    pub close_gallery_button: String,
    #[serde(rename = "openJSONButton")]
    pub open_json_button: String,
    pub no_data_label: String,
    pub default_card_title: String,
    pub layout_info_xl: String,
    pub layout_info_lg: String,
    pub layout_info_md: String,
    pub search_placeholder_text: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            header_edit_title_button: "Edit title".into(),
            header_import_button: "Import".into(),
            header_export_button: "Export".into(),
            header_delete_button: "Delete".into(),
            header_cancel_button: "Cancel".into(),
            header_submit_button: "Save and close".into(),
            header_fit_to_screen_button: "Fit to screen".into(),
            header_xlarge_button: "X-large view".into(),
            header_large_button: "Large view".into(),
            header_medium_button: "Medium view".into(),
            gallery_header: "Gallery".into(),
            open_gallery_button: "Open gallery".into(),
            close_gallery_button: "Back".into(),
            open_json_button: "Open JSON editor".into(),
            no_data_label: "No data source is defined".into(),
            default_card_title: "Untitled".into(),
            layout_info_xl: "Edit dashboard at extra large layout (1056 - 1312px)".into(),
            layout_info_lg: "Edit dashboard at large layout (672 - 1056px)".into(),
            layout_info_md: "Edit dashboard at medium layout (480 - 672px)".into(),
            search_placeholder_text: "Enter a value".into(),
        }
    }
}

impl Messages {
    /// Parse host overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed JSON or unknown keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn layout_info(&self, breakpoint: Breakpoint) -> &str {
        match breakpoint {
            Breakpoint::Xl => &self.layout_info_xl,
            Breakpoint::Lg => &self.layout_info_lg,
            Breakpoint::Md => &self.layout_info_md,
        }
    }

    /// Label of a header view switcher button.
    #[must_use]
    pub fn preset_label(&self, preset: LayoutPreset) -> &str {
        match preset {
            LayoutPreset::FitToScreen => &self.header_fit_to_screen_button,
            LayoutPreset::XLarge => &self.header_xlarge_button,
            LayoutPreset::Large => &self.header_large_button,
            LayoutPreset::Medium => &self.header_medium_button,
        }
    }
}

// =============================================================================
// CARD FORM
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CardFormMessages {
    pub open_editor_button: String,
    #[serde(rename = "cardSize_SMALL")]
    pub card_size_small: String,
    #[serde(rename = "cardSize_SMALLWIDE")]
    pub card_size_small_wide: String,
    #[serde(rename = "cardSize_MEDIUM")]
    pub card_size_medium: String,
    #[serde(rename = "cardSize_MEDIUMTHIN")]
    pub card_size_medium_thin: String,
    #[serde(rename = "cardSize_MEDIUMWIDE")]
    pub card_size_medium_wide: String,
    #[serde(rename = "cardSize_LARGE")]
    pub card_size_large: String,
    #[serde(rename = "cardSize_LARGETHIN")]
    pub card_size_large_thin: String,
    #[serde(rename = "cardSize_LARGEWIDE")]
    pub card_size_large_wide: String,
    #[serde(rename = "chartType_BAR")]
    pub chart_type_bar: String,
    #[serde(rename = "chartType_LINE")]
    pub chart_type_line: String,
    #[serde(rename = "barChartType_SIMPLE")]
    pub bar_chart_type_simple: String,
    #[serde(rename = "barChartType_GROUPED")]
    pub bar_chart_type_grouped: String,
    #[serde(rename = "barChartType_STACKED")]
    pub bar_chart_type_stacked: String,
    #[serde(rename = "barChartLayout_HORIZONTAL")]
    pub bar_chart_layout_horizontal: String,
    #[serde(rename = "barChartLayout_VERTICAL")]
    pub bar_chart_layout_vertical: String,
    pub card_title: String,
    pub description: String,
    pub size: String,
    pub select_a_size: String,
    pub time_range: String,
    pub select_a_time_range: String,
    pub last_24_hours: String,
    pub last_7_days: String,
    pub last_month: String,
    pub last_quarter: String,
    pub last_year: String,
    pub this_week: String,
    pub this_month: String,
    pub this_quarter: String,
    pub this_year: String,
}

impl Default for CardFormMessages {
    fn default() -> Self {
        Self {
            open_editor_button: "Open JSON editor".into(),
            card_size_small: "Small".into(),
            card_size_small_wide: "Small wide".into(),
            card_size_medium: "Medium".into(),
            card_size_medium_thin: "Medium thin".into(),
            card_size_medium_wide: "Medium wide".into(),
            card_size_large: "Large".into(),
            card_size_large_thin: "Large thin".into(),
            card_size_large_wide: "Large wide".into(),
            chart_type_bar: "Bar".into(),
            chart_type_line: "Line".into(),
            bar_chart_type_simple: "Simple".into(),
            bar_chart_type_grouped: "Grouped".into(),
            bar_chart_type_stacked: "Stacked".into(),
            bar_chart_layout_horizontal: "Horizontal".into(),
            bar_chart_layout_vertical: "Vertical".into(),
            card_title: "Card title".into(),
            description: "Description (Optional)".into(),
            size: "Size".into(),
            select_a_size: "Select a size".into(),
            time_range: "Time range".into(),
            select_a_time_range: "Select a time range".into(),
            last_24_hours: "Last 24 hours".into(),
            last_7_days: "Last 7 days".into(),
            last_month: "Last month".into(),
            last_quarter: "Last quarter".into(),
            last_year: "Last year".into(),
            this_week: "This week".into(),
            this_month: "This month".into(),
            this_quarter: "This quarter".into(),
            this_year: "This year".into(),
        }
    }
}

impl CardFormMessages {
    /// Parse host overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed JSON or unknown keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn card_size(&self, size: CardSize) -> &str {
        match size {
            CardSize::Small => &self.card_size_small,
            CardSize::SmallWide => &self.card_size_small_wide,
            CardSize::Medium => &self.card_size_medium,
            CardSize::MediumThin => &self.card_size_medium_thin,
            CardSize::MediumWide => &self.card_size_medium_wide,
            CardSize::Large => &self.card_size_large,
            CardSize::LargeThin => &self.card_size_large_thin,
            CardSize::LargeWide => &self.card_size_large_wide,
        }
    }

    #[must_use]
    pub fn time_range_label(&self, range: TimeRange) -> &str {
        match range {
            TimeRange::Last24Hours => &self.last_24_hours,
            TimeRange::Last7Days => &self.last_7_days,
            TimeRange::LastMonth => &self.last_month,
            TimeRange::LastQuarter => &self.last_quarter,
            TimeRange::LastYear => &self.last_year,
            TimeRange::ThisWeek => &self.this_week,
            TimeRange::ThisMonth => &self.this_month,
            TimeRange::ThisQuarter => &self.this_quarter,
            TimeRange::ThisYear => &self.this_year,
        }
    }
}
