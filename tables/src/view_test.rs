use super::*;
use crate::filter::Filter;
use crate::model::TableData;
use crate::sample;
use crate::sort::SortSpec;

fn state() -> TableState {
    TableState { ordering: sample::ordering(), ..TableState::default() }
}

// =============================================================
// Pipeline order
// =============================================================

#[test]
fn first_page_of_unfiltered_data() {
    let data = sample::table_data(100);
    let state = state();
    let view = derive_view(&state, &data);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.total_items(), 100);
    assert_eq!(view.row_ids()[0], "row-0");
    assert_eq!(view.status, ViewStatus::Ready);
}

#[test]
fn sort_happens_before_pagination() {
    let data = sample::table_data(30);
    let state = TableState { sort: Some(SortSpec::descending("number")), ..state() };
    let view = derive_view(&state, &data);
    assert_eq!(view.row_ids()[0], "row-29");
    assert_eq!(view.row_ids()[9], "row-20");
}

#[test]
fn total_items_counts_filtered_rows_not_raw_rows() {
    let data = sample::table_data(100);
    let state = TableState { filters: vec![Filter::new("select", "option-B")], ..state() };
    let view = derive_view(&state, &data);
    assert_eq!(view.total_items(), 33);
    assert!(view.rows.iter().all(|r| r.value("select").is_some_and(|v| v.to_string() == "option-B")));
    assert_eq!(view.rows.len(), 10);
}

#[test]
fn stale_page_is_clamped_in_view() {
    let data = sample::table_data(100);
    let mut state = state();
    state.pagination.page = 9;
    state.filters = vec![Filter::new("string", "whiteboard")];
    let view = derive_view(&state, &data);
    assert_eq!(view.total_items(), 40);
    assert_eq!(view.pagination.page, 4);
    assert_eq!(view.rows.len(), 10);
}

#[test]
fn without_pagination_every_filtered_row_is_visible() {
    let data = sample::table_data(25);
    let mut state = state();
    state.options.has_pagination = false;
    assert_eq!(derive_view(&state, &data).rows.len(), 25);
}

// =============================================================
// Columns
// =============================================================

#[test]
fn hidden_columns_are_not_in_view() {
    let data = sample::table_data(1);
    let state = state();
    let view = derive_view(&state, &data);
    let ids: Vec<&str> = view.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["string", "date", "select", "number"]);
}

// =============================================================
// Selection projections
// =============================================================

#[test]
fn page_and_filtered_projections_differ() {
    let data = sample::table_data(30);
    let mut state = state();
    state.selection.toggle_row("row-1");
    state.selection.toggle_row("row-25");
    let view = derive_view(&state, &data);
    assert_eq!(view.select_all, SelectAllState::Indeterminate);
    assert_eq!(view.selected_in_filtered, 2);
    assert!(view.is_selected("row-25"));
}

// =============================================================
// Status
// =============================================================

#[test]
fn empty_dataset_reports_empty() {
    let data = TableData::new(sample::columns(), Vec::new());
    let state = state();
    let view = derive_view(&state, &data);
    assert_eq!(view.status, ViewStatus::Empty);
    assert!(view.rows.is_empty());
    assert_eq!(view.pagination.page, 1);
}

#[test]
fn filter_with_no_matches_reports_no_matches() {
    let data = sample::table_data(10);
    let state = TableState { filters: vec![Filter::new("string", "zebra")], ..state() };
    assert_eq!(derive_view(&state, &data).status, ViewStatus::NoMatches);
}

#[test]
fn loading_wins_over_other_statuses() {
    let data = TableData::default();
    let state = TableState { is_loading: true, ..state() };
    assert_eq!(derive_view(&state, &data).status, ViewStatus::Loading);
}
