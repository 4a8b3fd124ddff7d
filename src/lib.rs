//! dashkit: state and bookkeeping behind a dashboard component library.
//!
//! Rendering lives in the host. This crate owns what the components
//! remember and decide: the table view-state (re-exported from [`tables`]),
//! the image hotspot viewer (re-exported from [`hotspots`]), and the
//! dashboard editor, card model, and list card defined here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`card`] | Card types, sizes, time ranges, validation |
//! | [`config`] | Initial props parsed and checked at the JSON boundary |
//! | [`editor`] | Dashboard editor session |
//! | [`error`] | Error enums |
//! | [`i18n`] | Typed UI strings with English defaults |
//! | [`layout`] | Breakpoints, grid layouts, view presets |
//! | [`list_card`] | Infinite-scroll list card |

pub mod card;
pub mod config;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod list_card;

pub use hotspots;
pub use tables;

pub use card::{CardConfig, CardSize, CardType, DataItem, TimeRange};
pub use config::{DashboardConfig, TableConfig};
pub use editor::{CardAction, DashboardEditor, DashboardJson};
pub use error::{CardError, ConfigError, EditorError};
pub use i18n::{CardFormMessages, Messages};
pub use layout::{Breakpoint, BreakpointSwitcher, LayoutItem, LayoutPreset, Layouts};
pub use list_card::{ListCard, ListItem, ScrollMetrics};
