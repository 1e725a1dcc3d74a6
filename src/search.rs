//! Field-scoped substring search over a dataset.

use crate::data::Record;
use crate::matcher::matches;
use crate::outcome::Outcome;
use tracing::debug;

/// Field searched when none is given on the command line.
pub const DEFAULT_FIELD: &str = "full_name";

/// Filters `records` to those whose `field` contains `query`, ignoring case.
///
/// The first record is the schema reference: if it lacks `field` the search
/// reports [`Outcome::FieldNotFound`] with its keys. Later records that lack
/// the field are skipped without comment. Matching records keep their
/// original order.
pub fn search(records: &[Record], query: &str, field: &str) -> Outcome {
    let Some(first) = records.first() else {
        return Outcome::NoData;
    };

    if !first.contains_key(field) {
        return Outcome::FieldNotFound {
            field: field.to_string(),
            available: first.keys().cloned().collect(),
        };
    }

    let results: Vec<Record> = records
        .iter()
        .filter(|record| matches(record, field, query))
        .cloned()
        .collect();

    debug!(
        query,
        field,
        scanned = records.len(),
        matched = results.len(),
        "search complete"
    );

    if results.is_empty() {
        Outcome::NoMatches {
            query: query.to_string(),
            field: field.to_string(),
        }
    } else {
        Outcome::Records(results)
    }
}
