//! Error types for the dashboard layer.
//!
//! Only the JSON boundary and explicit editor submissions return errors.
//! Everything else treats bad input as a no-op and logs it.

use tables::reducer::Rejection;

use crate::card::{CardSize, CardType};
use crate::layout::Breakpoint;

/// Rejected initial props.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate column id: {0}")]
    DuplicateColumn(String),
    #[error("duplicate row id: {0}")]
    DuplicateRow(String),
    #[error("{context} references unknown column: {column_id}")]
    UnknownColumn { column_id: String, context: &'static str },
    #[error("{context} references unknown row: {row_id}")]
    UnknownRow { row_id: String, context: &'static str },
    #[error("page size must be positive")]
    ZeroPageSize,
    #[error("page is 1-indexed; got 0")]
    ZeroPage,
    #[error("initial view rejected: {0}")]
    InvalidView(#[from] Rejection),
    #[error("duplicate card id: {0}")]
    DuplicateCard(String),
    #[error("{breakpoint} layout references unknown card: {card_id}")]
    UnknownLayoutCard { breakpoint: Breakpoint, card_id: String },
}

/// A card configuration that breaks the card schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("card id is empty")]
    EmptyId,
    #[error("size {size} is not allowed for {card_type} cards")]
    SizeNotAllowed { card_type: CardType, size: CardSize },
    #[error("card content must be a JSON object")]
    ContentNotObject,
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("unknown card: {0}")]
    UnknownCard(String),
    #[error("unsupported card type: {0}")]
    UnsupportedCardType(CardType),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid dashboard: {0}")]
    InvalidDashboard(#[from] ConfigError),
    #[error("card failed validation: {}", join(.0))]
    InvalidCard(Vec<CardError>),
    #[error("card rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),
}

fn join(errors: &[CardError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
