//! Field matching for search.

use crate::data::Record;
use serde_json::Value;
use std::borrow::Cow;

/// Returns the text form of a JSON value used for matching and CSV cells.
///
/// Strings are returned as-is, `null` becomes the empty string, numbers and
/// booleans use their canonical text, and arrays/objects are compact JSON.
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Case-insensitive substring test of `query` against `record[field]`.
///
/// A record without `field` never matches.
pub fn matches(record: &Record, field: &str, query: &str) -> bool {
    match record.get(field) {
        Some(value) => contains_ignore_case(&stringify(value), query),
        None => false,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
