//! Deterministic sample dataset used by tests. Compiled in for
//! `cfg(test)` and behind the `sample` feature.
//!
//! Mirrors the stateful table showcase: five columns (`string`, `date`,
//! `select`, `secretField`, `number`) with generated values.

use crate::model::{BatchAction, Column, ColumnFilter, FilterOption, Row, RowAction, TableData};
use crate::ordering::ColumnOrdering;

const WORDS: [&str; 10] = [
    "toyota",
    "helping",
    "whiteboard",
    "as",
    "can",
    "bottle",
    "eat",
    "chocolate",
    "pinocchio",
    "scott",
];

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const SELECT_OPTIONS: [&str; 3] = ["option-A", "option-B", "option-C"];

fn word(index: usize, step: usize) -> &'static str {
    WORDS[(step * index) % WORDS.len()]
}

fn sentence(index: usize) -> String {
    format!("{} {} {} {index}", word(index, 1), word(index, 2), word(index, 3))
}

fn scrambled(index: usize, length: usize) -> String {
    (0..length)
        .map(|idx| char::from(LETTERS[(index * (idx + 14) * (idx + 1)) % LETTERS.len()]))
        .collect()
}

/// ISO-8601 timestamp for `millis` since the Unix epoch (UTC).
#[must_use]
pub fn iso_timestamp(millis: i64) -> String {
    let secs = millis.div_euclid(1000);
    let ms = millis.rem_euclid(1000);
    let days = secs.div_euclid(86_400);
    let tod = secs.rem_euclid(86_400);
    let (y, m, d) = civil_from_days(days);
    format!(
        "{y:04}-{m:02}-{d:02}T{:02}:{:02}:{:02}.{ms:03}Z",
        tod / 3600,
        (tod % 3600) / 60,
        tod % 60
    )
}

// Days since 1970-01-01 to a proleptic Gregorian date.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

/// Column definitions; `date` is the only non-sortable column.
#[must_use]
pub fn columns() -> Vec<Column> {
    let options = SELECT_OPTIONS
        .iter()
        .map(|id| FilterOption { id: (*id).to_owned(), text: (*id).to_owned() })
        .collect();
    let placeholder = |text: &str| ColumnFilter { placeholder_text: Some(text.to_owned()), options: Vec::new() };
    vec![
        Column::new("string", "String").sortable().with_filter(placeholder("pick a string")),
        Column::new("date", "Date").with_filter(placeholder("pick a date")),
        Column::new("select", "Select")
            .sortable()
            .with_filter(ColumnFilter { placeholder_text: Some("pick an option".into()), options }),
        Column::new("secretField", "Secret Information").sortable(),
        Column::new("number", "Number").sortable().with_filter(placeholder("pick a number")),
    ]
}

/// Row `idx` of the sample dataset.
#[must_use]
pub fn row(idx: usize) -> Row {
    let n = i64::try_from(idx).unwrap_or(i64::MAX);
    let mut row = Row::new(format!("row-{idx}"))
        .with_value("string", sentence(idx))
        .with_value("date", iso_timestamp(100_000_000_000 + 1_000_000_000 * n * n))
        .with_value("select", SELECT_OPTIONS[idx % SELECT_OPTIONS.len()])
        .with_value("secretField", scrambled(idx, 10))
        .with_value("number", n * n);
    if idx % 4 != 0 {
        row.row_actions.push(RowAction {
            id: "drilldown".into(),
            icon: Some("arrow--right".into()),
            label_text: "Drill in".into(),
            is_overflow: false,
        });
    }
    row.row_actions.push(RowAction {
        id: "Add".into(),
        icon: Some("icon--add".into()),
        label_text: "Add".into(),
        is_overflow: true,
    });
    row
}

/// `count` generated rows with the sample columns and a `delete` batch
/// action.
#[must_use]
pub fn table_data(count: usize) -> TableData {
    TableData::new(columns(), (0..count).map(row).collect()).with_batch_actions(vec![BatchAction {
        id: "delete".into(),
        label_text: "Delete".into(),
        icon: Some("delete".into()),
    }])
}

/// Ordering with `secretField` hidden.
#[must_use]
pub fn ordering() -> Vec<ColumnOrdering> {
    columns()
        .into_iter()
        .map(|c| ColumnOrdering { is_hidden: c.id == "secretField", column_id: c.id })
        .collect()
}
