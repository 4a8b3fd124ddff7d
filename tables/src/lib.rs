//! Table view-state for dashboard tables.
//!
//! This crate is UI-framework agnostic. It owns the bookkeeping behind a
//! stateful data table (filters, search, sort, pagination, row selection and
//! expansion, column ordering) and derives the rows a presentation layer
//! should draw. Rendering is out of scope.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Rows, columns, cell values |
//! | [`filter`] | Column filters and toolbar search |
//! | [`sort`] | Stable sort comparator |
//! | [`pagination`] | Page math and slicing |
//! | [`selection`] | Selected ids and the select-all tri-state |
//! | [`expansion`] | Expanded ids and host content lookup |
//! | [`ordering`] | Column order and visibility |
//! | [`toolbar`] | Active toolbar bar and search text |
//! | [`state`] | The view-state value and table options |
//! | [`action`] | Actions a host dispatches |
//! | [`reducer`] | `(state, action) -> state'` |
//! | [`view`] | Derived view: filter → sort → paginate |
//! | [`table`] | [`table::StatefulTable`], a single-owner dispatcher |
//! | `sample` | Deterministic sample dataset (tests and the `sample` feature) |

pub mod action;
pub mod expansion;
pub mod filter;
pub mod model;
pub mod ordering;
pub mod pagination;
pub mod reducer;
#[cfg(any(test, feature = "sample"))]
pub mod sample;
pub mod selection;
pub mod sort;
pub mod state;
pub mod table;
pub mod toolbar;
pub mod view;

pub use action::TableAction;
pub use model::{BatchAction, CellValue, Column, ColumnFilter, FilterOption, Row, RowAction, TableData};
pub use reducer::{reduce, try_reduce};
pub use state::{SelectAllScope, StaleIdPolicy, TableOptions, TableState};
pub use table::StatefulTable;
pub use view::{TableView, ViewStatus, derive_view};
