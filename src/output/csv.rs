//! CSV renderer.
//!
//! The header row comes from the first record's keys. Every row is laid out
//! against that header, so records with a different key set are padded or
//! truncated rather than shifted.

use crate::data::Record;
use crate::error::Result;
use crate::matcher::stringify;
use csv::Writer;
use std::io;
use tracing::debug;

/// Renders records as CSV with a header row.
///
/// # Returns
/// * The CSV text, each row terminated by `\n`
/// * An empty string for an empty slice (no header either)
pub fn render(records: &[Record]) -> Result<String> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;

    for (row, record) in records.iter().enumerate() {
        if !same_columns(record, &headers) {
            debug!(row, "record keys differ from the CSV header; aligning to header");
        }
        let cells = headers
            .iter()
            .map(|key| record.get(*key).map(stringify).unwrap_or_default());
        writer.write_record(cells.map(|cell| cell.into_owned()))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn same_columns(record: &Record, headers: &[&str]) -> bool {
    record.len() == headers.len() && headers.iter().all(|key| record.contains_key(*key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let data = records(json!([
            {"name": "John Doe", "email": "john@example.com"},
            {"name": "Jane Smith", "email": "jane@example.com"}
        ]));
        assert_eq!(
            render(&data).unwrap(),
            "name,email\nJohn Doe,john@example.com\nJane Smith,jane@example.com\n"
        );
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render(&[]).unwrap(), "");
    }

    #[test]
    fn test_quoting_and_value_text() {
        let data = records(json!([
            {"name": "Doe, John", "id": 5, "active": true, "note": null, "quote": "say \"hi\""}
        ]));
        assert_eq!(
            render(&data).unwrap(),
            "name,id,active,note,quote\n\"Doe, John\",5,true,,\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_empty_string_and_null_both_render_empty() {
        let data = records(json!([
            {"name": "A", "email": "", "phone": null},
            {"name": "B", "email": null, "phone": ""}
        ]));
        assert_eq!(render(&data).unwrap(), "name,email,phone\nA,,\nB,,\n");
    }

    #[test]
    fn test_ragged_rows_align_to_first_header() {
        let data = records(json!([
            {"name": "A", "email": "a@x.com"},
            {"email": "b@x.com", "name": "B", "extra": "dropped"},
            {"name": "C"}
        ]));
        assert_eq!(
            render(&data).unwrap(),
            "name,email\nA,a@x.com\nB,b@x.com\nC,\n"
        );
    }
}
