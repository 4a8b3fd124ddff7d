use super::*;

fn rows() -> Vec<Row> {
    vec![
        Row::new("a").with_value("number", 10_i64).with_value("select", "option-B"),
        Row::new("b").with_value("number", 9_i64).with_value("select", "option-A"),
        Row::new("c").with_value("number", 100_i64).with_value("select", "option-B"),
        Row::new("d").with_value("select", "option-A"),
    ]
}

fn sorted_ids(data: &[Row], spec: Option<&SortSpec>) -> Vec<String> {
    let mut refs: Vec<&Row> = data.iter().collect();
    sort_rows(&mut refs, spec);
    refs.iter().map(|r| r.id.clone()).collect()
}

// =============================================================
// compare
// =============================================================

#[test]
fn numbers_compare_numerically_not_lexically() {
    let data = rows();
    assert_eq!(sorted_ids(&data, Some(&SortSpec::ascending("number"))), ["d", "b", "a", "c"]);
}

#[test]
fn descending_reverses_comparator() {
    let data = rows();
    assert_eq!(sorted_ids(&data, Some(&SortSpec::descending("number"))), ["c", "a", "b", "d"]);
}

#[test]
fn mixed_values_fall_back_to_string_order() {
    let a = CellValue::from("10");
    let b = CellValue::Number(9.0);
    assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
}

#[test]
fn missing_cells_sort_first() {
    assert_eq!(compare_values(None, Some(&CellValue::Number(0.0))), Ordering::Less);
    assert_eq!(compare_values(None, None), Ordering::Equal);
}

// =============================================================
// sort_rows
// =============================================================

#[test]
fn no_sort_spec_preserves_order() {
    let data = rows();
    assert_eq!(sorted_ids(&data, None), ["a", "b", "c", "d"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let data = rows();
    assert_eq!(sorted_ids(&data, Some(&SortSpec::ascending("select"))), ["b", "d", "a", "c"]);
    assert_eq!(sorted_ids(&data, Some(&SortSpec::descending("select"))), ["a", "c", "b", "d"]);
}

#[test]
fn sort_is_idempotent() {
    let data = rows();
    let spec = SortSpec::ascending("select");
    let mut once: Vec<&Row> = data.iter().collect();
    sort_rows(&mut once, Some(&spec));
    let mut twice = once.clone();
    sort_rows(&mut twice, Some(&spec));
    assert_eq!(once, twice);
}

#[test]
fn direction_flips() {
    assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
    assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
}
