use serde_json::json;

use super::*;
use tables::reducer::Rejection;

use crate::layout::{Breakpoint, LayoutPreset};

fn table_json(view: serde_json::Value) -> String {
    json!({
        "id": "devices",
        "columns": [
            { "id": "name", "name": "Name", "isSortable": true },
            { "id": "status", "name": "Status",
              "filter": { "placeholderText": "pick", "options": [{ "id": "on", "text": "On" }, { "id": "off", "text": "Off" }] } },
        ],
        "data": [
            { "id": "r1", "values": { "name": "pump", "status": "on" } },
            { "id": "r2", "values": { "name": "valve", "status": "off" } },
            { "id": "r3", "values": { "name": "fan", "status": "on" } },
        ],
        "options": { "hasPagination": true, "staleIds": "prune" },
        "view": view,
    })
    .to_string()
}

// =============================================================================
// TableConfig
// =============================================================================

#[test]
fn parses_table_props_into_a_settled_table() {
    let json = table_json(json!({
        "filters": [{ "columnId": "status", "value": "on" }],
        "sort": { "columnId": "name", "direction": "DESCENDING" },
        "pagination": { "page": 4, "pageSize": 10, "pageSizes": [10, 20] },
        "selectedIds": ["r1"],
        "activeBar": "filter",
    }));
    let config = TableConfig::from_json(&json).unwrap();
    assert_eq!(config.id, "devices");
    let table = config.into_table();
    let state = table.state();
    assert_eq!(state.pagination.total_items, 2);
    assert_eq!(state.pagination.page, 1);
    assert_eq!(state.toolbar.active_bar, Some(ActiveBar::Filter));
    let view = table.view();
    let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r3"]);
}

#[test]
fn empty_view_uses_defaults() {
    let config = TableConfig::from_json(&table_json(json!({}))).unwrap();
    let state = config.initial_state();
    assert_eq!(state.pagination, Pagination::default());
    assert!(state.filters.is_empty());
    assert_eq!(state.options.stale_ids, tables::StaleIdPolicy::Prune);
}

#[test]
fn duplicate_row_ids_are_rejected() {
    let json = json!({
        "columns": [{ "id": "a", "name": "A" }],
        "data": [{ "id": "x", "values": {} }, { "id": "x", "values": {} }],
    })
    .to_string();
    assert!(matches!(TableConfig::from_json(&json), Err(ConfigError::DuplicateRow(id)) if id == "x"));
}

#[test]
fn duplicate_column_ids_are_rejected() {
    let json = json!({ "columns": [{ "id": "a", "name": "A" }, { "id": "a", "name": "B" }] }).to_string();
    assert!(matches!(TableConfig::from_json(&json), Err(ConfigError::DuplicateColumn(_))));
}

#[test]
fn references_to_unknown_columns_are_rejected() {
    let cases = [
        (json!({ "filters": [{ "columnId": "ghost", "value": "x" }] }), "filter"),
        (json!({ "sort": { "columnId": "ghost", "direction": "ASCENDING" } }), "sort"),
        (json!({ "ordering": [{ "columnId": "ghost" }] }), "ordering"),
    ];
    for (view, expected) in cases {
        match TableConfig::from_json(&table_json(view)) {
            Err(ConfigError::UnknownColumn { column_id, context }) => {
                assert_eq!(column_id, "ghost");
                assert_eq!(context, expected);
            }
            other => panic!("expected unknown column for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn zero_page_size_is_rejected() {
    let json = table_json(json!({ "pagination": { "page": 1, "pageSize": 0 } }));
    assert!(matches!(TableConfig::from_json(&json), Err(ConfigError::ZeroPageSize)));
}

#[test]
fn page_zero_is_rejected() {
    let json = table_json(json!({ "pagination": { "page": 0, "pageSize": 10, "totalItems": 5 } }));
    assert!(matches!(TableConfig::from_json(&json), Err(ConfigError::ZeroPage)));
}

#[test]
fn selected_and_expanded_ids_must_name_rows() {
    let cases = [
        (json!({ "selectedIds": ["r1", "ghost"] }), "selection"),
        (json!({ "expandedIds": ["ghost"] }), "expansion"),
    ];
    for (view, expected) in cases {
        match TableConfig::from_json(&table_json(view)) {
            Err(ConfigError::UnknownRow { row_id, context }) => {
                assert_eq!(row_id, "ghost");
                assert_eq!(context, expected);
            }
            other => panic!("expected unknown row for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn initial_sort_on_unsortable_column_is_rejected() {
    let json = table_json(json!({ "sort": { "columnId": "status", "direction": "ASCENDING" } }));
    match TableConfig::from_json(&json) {
        Err(ConfigError::InvalidView(Rejection::UnsortableColumn(id))) => assert_eq!(id, "status"),
        other => panic!("expected unsortable column, got {other:?}"),
    }
}

#[test]
fn initial_filter_outside_options_is_rejected() {
    let json = table_json(json!({ "filters": [{ "columnId": "status", "value": "broken" }] }));
    assert!(matches!(
        TableConfig::from_json(&json),
        Err(ConfigError::InvalidView(Rejection::InvalidFilterValue { .. }))
    ));
}

#[test]
fn batch_actions_travel_with_the_data() {
    let json = table_json(json!({ "batchActions": [{ "id": "delete", "labelText": "Delete" }] }));
    let table = TableConfig::from_json(&json).unwrap().into_table();
    assert_eq!(table.data().batch_action("delete").map(|a| a.label_text.as_str()), Some("Delete"));
}

#[test]
fn unknown_top_level_key_is_rejected() {
    let json = json!({ "columns": [], "rowz": [] }).to_string();
    let err = TableConfig::from_json(&json).unwrap_err();
    assert!(err.to_string().starts_with("invalid JSON"));
}

// =============================================================================
// DashboardConfig
// =============================================================================

fn dashboard_json(layout_card: &str) -> String {
    json!({
        "title": "Plant overview",
        "initialValue": {
            "cards": [
                { "id": "temp", "title": "Temperature", "size": "SMALL", "type": "VALUE" },
                { "id": "trend", "size": "MEDIUM", "type": "TIMESERIES" },
            ],
            "layouts": { "lg": [{ "i": layout_card, "x": 0, "y": 0, "w": 4, "h": 1 }] },
        },
        "supportedCardTypes": ["VALUE", "TIMESERIES"],
        "breakpointSwitcher": { "enabled": true, "initialValue": "MEDIUM" },
        "i18n": { "defaultCardTitle": "New" },
    })
    .to_string()
}

#[test]
fn parses_dashboard_props_into_editor() {
    let config = DashboardConfig::from_json(&dashboard_json("temp")).unwrap();
    assert_eq!(config.title, "Plant overview");
    let mut editor = config.into_editor();
    assert_eq!(editor.title(), "Plant overview");
    assert_eq!(editor.preset(), LayoutPreset::Medium);
    assert_eq!(editor.current_breakpoint(), Breakpoint::Md);
    assert_eq!(editor.supported_card_types(), &[CardType::Value, CardType::TimeSeries]);
    assert!(editor.add_card(CardType::Table).is_err());
    editor.add_card(CardType::Value).unwrap();
    assert_eq!(editor.selected_card().unwrap().title, "New");
}

#[test]
fn layout_item_for_unknown_card_is_rejected() {
    match DashboardConfig::from_json(&dashboard_json("ghost")) {
        Err(ConfigError::UnknownLayoutCard { breakpoint, card_id }) => {
            assert_eq!(breakpoint, Breakpoint::Lg);
            assert_eq!(card_id, "ghost");
        }
        other => panic!("expected dangling layout error, got {other:?}"),
    }
}

#[test]
fn duplicate_card_ids_are_rejected() {
    let json = json!({
        "initialValue": { "cards": [
            { "id": "a", "size": "SMALL", "type": "VALUE" },
            { "id": "a", "size": "SMALL", "type": "VALUE" },
        ] }
    })
    .to_string();
    assert!(matches!(DashboardConfig::from_json(&json), Err(ConfigError::DuplicateCard(_))));
}

#[test]
fn unknown_i18n_key_is_rejected() {
    let json = json!({ "i18n": { "notAKey": "x" } }).to_string();
    assert!(matches!(DashboardConfig::from_json(&json), Err(ConfigError::Json(_))));
}
