//! Plain-text rendering of records.
//!
//! Nothing here escapes, wraps or truncates values; tools that need a display
//! limit apply it on top (see [`format_list_response`]).

use serde_json::Value;

use crate::messages;
use crate::record::{display_value, Record};

/// Line placed between records by [`format_records`].
pub const RECORD_SEPARATOR: &str = "------------------------------";

/// Values treated as "no data" by the meaningful-field helpers.
const ABSENT_SENTINELS: &[&str] = &["", "N/A", "0", "0.000"];

/// Renders every field as a `key: value` line, in record order.
pub fn format_record(record: &Record) -> String {
    record
        .iter()
        .map(|(key, value)| format!("{}: {}", key, display_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders records one after another with [`RECORD_SEPARATOR`] between them.
pub fn format_records(records: &[Record]) -> String {
    format_records_with(records, RECORD_SEPARATOR)
}

/// Renders records with a custom separator line.
pub fn format_records_with(records: &[Record], separator: &str) -> String {
    let between = format!("\n{separator}\n");
    records
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join(between.as_str())
}

/// Returns true for values that carry no information.
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => ABSENT_SENTINELS.contains(&s.as_str()),
        _ => false,
    }
}

/// Returns true if any of `fields` is present with a meaningful value.
pub fn has_meaningful_data(record: &Record, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| record.get(field).is_some_and(|value| !is_absent(value)))
}

/// Copies the record without absent values and without the `exclude` fields.
pub fn filter_meaningful(record: &Record, exclude: &[&str]) -> Record {
    record
        .iter()
        .filter(|(key, value)| !exclude.contains(key) && !is_absent(value))
        .map(|(key, value)| (key, value.clone()))
        .collect()
}

/// Formats only the meaningful fields of a record.
pub fn format_meaningful(record: &Record, exclude: &[&str]) -> String {
    format_record(&filter_meaningful(record, exclude))
}

/// Renders a counted, truncated list.
///
/// The header names the total, `line` renders each of the first `limit`
/// records, and a trailer reports how many were left out.
pub fn format_list_response<F>(records: &[Record], title: &str, limit: usize, line: F) -> String
where
    F: Fn(&Record) -> String,
{
    let total = records.len();
    let mut out = messages::total_records(total, title);
    out.push_str("\n\n");
    for record in records.iter().take(limit) {
        out.push_str(&line(record));
        out.push('\n');
    }
    if total > limit {
        out.push('\n');
        out.push_str(&messages::more_records(total - limit));
    }
    out.trim_end().to_string()
}
