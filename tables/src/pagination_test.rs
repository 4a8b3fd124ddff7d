use super::*;

// =============================================================
// last_page / clamp_page
// =============================================================

#[test]
fn last_page_rounds_up() {
    assert_eq!(last_page(100, 10), 10);
    assert_eq!(last_page(101, 10), 11);
    assert_eq!(last_page(3, 10), 1);
}

#[test]
fn last_page_is_never_zero() {
    assert_eq!(last_page(0, 10), 1);
    assert_eq!(last_page(5, 0), 1);
}

#[test]
fn clamp_pulls_page_back_into_range() {
    assert_eq!(clamp_page(7, 5, 10), 1);
    assert_eq!(clamp_page(0, 50, 10), 1);
    assert_eq!(clamp_page(3, 50, 10), 3);
}

// =============================================================
// slice
// =============================================================

#[test]
fn slice_returns_requested_window() {
    let rows: Vec<usize> = (0..25).collect();
    assert_eq!(slice(&rows, 1, 10), &rows[0..10]);
    assert_eq!(slice(&rows, 3, 10), &rows[20..25]);
}

#[test]
fn slice_past_end_is_empty_not_panicking() {
    let rows: Vec<usize> = (0..5).collect();
    assert!(slice(&rows, 4, 10).is_empty());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn default_pagination_starts_on_first_page() {
    let p = Pagination::default();
    assert_eq!(p.page, 1);
    assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(p.page_sizes, vec![10, 20, 30]);
}

#[test]
fn with_total_clamps_page() {
    let p = Pagination { page: 6, page_size: 10, page_sizes: Vec::new(), total_items: 100 };
    let shrunk = p.with_total(5);
    assert_eq!(shrunk.page, 1);
    assert_eq!(shrunk.total_items, 5);
    assert_eq!(p.page, 6, "original is untouched");
}

#[test]
fn allows_page_size_respects_list() {
    let p = Pagination::default();
    assert!(p.allows_page_size(20));
    assert!(!p.allows_page_size(15));
    assert!(!p.allows_page_size(0));
    let open = Pagination { page_sizes: Vec::new(), ..Pagination::default() };
    assert!(open.allows_page_size(15));
}

#[test]
fn range_label_covers_partial_last_page() {
    let p = Pagination { page: 3, page_size: 10, page_sizes: Vec::new(), total_items: 23 };
    assert_eq!(p.range_label(), (21, 23));
    let empty = Pagination::default();
    assert_eq!(empty.range_label(), (0, 0));
}

#[test]
fn range_label_reads_page_zero_as_first_page() {
    let p = Pagination { page: 0, page_size: 10, page_sizes: Vec::new(), total_items: 5 };
    assert_eq!(p.range_label(), (1, 5));
}
