//! Duplicate email detection.
//!
//! Records are grouped by a normalized email key (trimmed, lowercased). Every
//! group with two or more members is returned, flattened in the order groups
//! were first seen, with each record annotated by its own original email.

use crate::data::Record;
use crate::matcher::stringify;
use crate::outcome::Outcome;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Field holding the email address on each record.
pub const EMAIL_FIELD: &str = "email";

/// Field added to each returned record.
pub const DUPLICATE_KEY: &str = "duplicate_email";

/// Normalized grouping key for an email value.
///
/// Absent and `null` emails normalize to the empty string.
pub fn normalize_email(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(value) => stringify(value).trim().to_lowercase(),
    }
}

/// Finds records sharing an email address.
///
/// Records with a missing or blank email never form a group. The added
/// [`DUPLICATE_KEY`] field holds the record's own email exactly as loaded,
/// so two records in one group can show different casing.
pub fn find_duplicates(records: &[Record]) -> Outcome {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Record>> = Vec::new();

    for record in records {
        let key = normalize_email(record.get(EMAIL_FIELD));
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&slot) => groups[slot].push(record),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![record]);
            }
        }
    }

    let duplicates: Vec<Record> = groups
        .into_iter()
        .filter(|group| group.len() > 1)
        .flatten()
        .map(annotate)
        .collect();

    debug!(
        scanned = records.len(),
        distinct = index.len(),
        duplicates = duplicates.len(),
        "duplicate scan complete"
    );

    if duplicates.is_empty() {
        Outcome::NoDuplicates
    } else {
        Outcome::Records(duplicates)
    }
}

fn annotate(record: &Record) -> Record {
    let mut annotated = record.clone();
    let email = record.get(EMAIL_FIELD).cloned().unwrap_or(Value::Null);
    annotated.insert(DUPLICATE_KEY.to_string(), email);
    annotated
}
