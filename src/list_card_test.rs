use super::*;

fn items(range: std::ops::Range<usize>) -> Vec<ListItem> {
    range.map(|i| ListItem { id: format!("row-{i}"), value: format!("Row content {i}"), link: None }).collect()
}

const BOTTOM: ScrollMetrics = ScrollMetrics { scroll_height: 500.0, scroll_top: 300.0, client_height: 200.0 };
const MIDDLE: ScrollMetrics = ScrollMetrics { scroll_height: 500.0, scroll_top: 100.0, client_height: 200.0 };

#[test]
fn scrolling_to_bottom_loads_once() {
    let mut card = ListCard::new("list", items(0..10), true);
    let mut calls = 0;
    assert!(card.on_scroll(&BOTTOM, || calls += 1));
    assert!(card.is_loading);
    // A second scroll while loading is ignored.
    assert!(!card.on_scroll(&BOTTOM, || calls += 1));
    assert_eq!(calls, 1);
}

#[test]
fn scrolling_mid_list_does_nothing() {
    let mut card = ListCard::new("list", items(0..10), true);
    assert!(!card.on_scroll(&MIDDLE, || {}));
    assert!(!card.is_loading);
}

#[test]
fn no_more_data_stops_loading() {
    let card = ListCard::new("list", items(0..10), false);
    assert!(!card.should_load_more(&BOTTOM));
}

#[test]
fn subpixel_bottom_counts() {
    let m = ScrollMetrics { scroll_height: 500.0, scroll_top: 299.5, client_height: 200.0 };
    assert!(m.is_at_bottom());
}

#[test]
fn append_finishes_load() {
    let mut card = ListCard::new("list", items(0..10), true);
    card.on_scroll(&BOTTOM, || {});
    card.append(items(10..20), false);
    assert_eq!(card.items.len(), 20);
    assert!(!card.is_loading);
    assert!(!card.has_more_data);
    assert_eq!(card.items[19].id, "row-19");
}

#[test]
fn empty_card() {
    assert!(ListCard::default().is_empty());
    let card: ListCard = serde_json::from_value(serde_json::json!({
        "id": "l", "data": [{"id": "a", "value": "A", "link": "https://example.com"}], "hasMoreData": true
    }))
    .unwrap();
    assert!(!card.is_empty());
    assert_eq!(card.items[0].link.as_deref(), Some("https://example.com"));
}
