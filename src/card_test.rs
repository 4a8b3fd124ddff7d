use super::*;

fn card(card_type: CardType, size: CardSize) -> CardConfig {
    CardConfig {
        id: "card-1".into(),
        title: "Card".into(),
        description: None,
        size,
        card_type,
        content: json!({}),
        data_source: None,
        interval: None,
        show_legend: None,
    }
}

// =============================================================================
// Sizes
// =============================================================================

#[test]
fn size_text_uses_large_breakpoint_dimensions() {
    let m = CardFormMessages::default();
    assert_eq!(card_size_text(CardSize::Medium, &m), "Medium (8x2)");
    assert_eq!(card_size_text(CardSize::LargeWide, &m), "Large wide (16x4)");
    assert_eq!(card_size_text(CardSize::Small, &m), "Small (4x1)");
}

#[test]
fn medium_breakpoint_caps_width() {
    assert_eq!(CardSize::MediumWide.dimensions(Breakpoint::Md), Dimensions { w: 8, h: 2 });
    assert_eq!(CardSize::MediumWide.dimensions(Breakpoint::Xl), Dimensions { w: 16, h: 2 });
}

#[test]
fn every_default_size_is_allowed() {
    for card_type in CardType::ALL {
        assert!(card_type.allowed_sizes().contains(&card_type.default_size()), "{card_type}");
    }
}

#[test]
fn size_options_follow_allowed_sizes() {
    let options = size_options(CardType::Table, &CardFormMessages::default());
    let sizes: Vec<CardSize> = options.iter().map(|(s, _)| *s).collect();
    assert_eq!(sizes, vec![CardSize::MediumWide, CardSize::Large, CardSize::LargeWide]);
    assert_eq!(options[1].1, "Large (8x4)");
}

// =============================================================================
// Cards
// =============================================================================

#[test]
fn card_json_uses_camel_case_keys() {
    let c: CardConfig = serde_json::from_value(json!({
        "id": "a",
        "title": "Temp",
        "size": "MEDIUMTHIN",
        "type": "TIMESERIES",
        "showLegend": true
    }))
    .unwrap();
    assert_eq!(c.card_type, CardType::TimeSeries);
    assert_eq!(c.size, CardSize::MediumThin);
    assert_eq!(c.show_legend, Some(true));
    assert!(c.content.is_object());

    let back = serde_json::to_value(&c).unwrap();
    assert_eq!(back["type"], "TIMESERIES");
    assert!(back.get("description").is_none());
}

#[test]
fn default_card_uses_title_and_default_size() {
    let c = default_card(CardType::TimeSeries, &Messages::default());
    assert_eq!(c.title, "Untitled");
    assert_eq!(c.size, CardSize::Medium);
    assert_eq!(c.interval.as_deref(), Some("day"));
    assert_eq!(c.content["timeDataSourceId"], "timestamp");
    assert!(validate_card(&c).is_empty());
}

#[test]
fn default_cards_get_distinct_ids() {
    let m = Messages::default();
    assert_ne!(default_card(CardType::Value, &m).id, default_card(CardType::Value, &m).id);
}

#[test]
fn duplicate_keeps_everything_but_id() {
    let original = card(CardType::Bar, CardSize::Large);
    let copy = duplicate_card(&original);
    assert_ne!(copy.id, original.id);
    assert_eq!(CardConfig { id: original.id.clone(), ..copy }, original);
}

#[test]
fn validate_reports_each_problem() {
    let mut c = card(CardType::Table, CardSize::Small);
    c.id = "  ".into();
    c.content = json!([1, 2]);
    let errors = validate_card(&c);
    assert_eq!(
        errors,
        vec![
            CardError::EmptyId,
            CardError::SizeNotAllowed { card_type: CardType::Table, size: CardSize::Small },
            CardError::ContentNotObject,
        ]
    );
    assert_eq!(errors[1].to_string(), "size SMALL is not allowed for TABLE cards");
}

// =============================================================================
// Time ranges
// =============================================================================

#[test]
fn nine_default_time_ranges() {
    let ranges = default_time_ranges();
    assert_eq!(ranges.len(), 9);
    assert_eq!(ranges[0], TimeRange::Last24Hours);
    assert_eq!(serde_json::to_value(TimeRange::Last7Days).unwrap(), "last7Days");
}

#[test]
fn hook_overrides_valid_time_ranges() {
    let c = card(CardType::TimeSeries, CardSize::Medium);
    let hook = |_: &CardConfig, items: &[String]| {
        if items.is_empty() { vec![TimeRange::ThisYear] } else { vec![TimeRange::LastMonth] }
    };
    assert_eq!(valid_time_ranges(&c, &[], Some(&hook)), vec![TimeRange::ThisYear]);
    assert_eq!(valid_time_ranges(&c, &["temp".to_owned()], Some(&hook)), vec![TimeRange::LastMonth]);
    assert_eq!(valid_time_ranges(&c, &[], None).len(), 9);
}

#[test]
fn applying_time_range_sets_interval_and_range() {
    let mut c = card(CardType::TimeSeries, CardSize::Medium);
    c.data_source = Some(json!({ "attributes": ["temp"] }));
    let updated = with_time_range(&c, TimeRange::LastQuarter);
    assert_eq!(updated.interval.as_deref(), Some("week"));
    let ds = updated.data_source.unwrap();
    assert_eq!(ds["range"], json!({ "interval": "quarter", "count": -1, "type": "rolling" }));
    assert_eq!(ds["attributes"], json!(["temp"]));
}

#[test]
fn period_to_date_ranges() {
    let (spec, grain) = TimeRange::ThisWeek.spec();
    assert_eq!(spec.kind, RangeKind::PeriodToDate);
    assert_eq!(spec.interval, "week");
    assert_eq!(grain, "day");
}
