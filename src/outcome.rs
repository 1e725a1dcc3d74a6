//! The result of a single analysis.
//!
//! An analysis either yields records for the serializer or one of several
//! informational conditions. None of the informational variants are errors.

use crate::data::Record;
use std::fmt;

/// Tagged result of [`crate::search::search`] and
/// [`crate::duplicates::find_duplicates`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Matching or annotated records, ready for serialization.
    Records(Vec<Record>),
    /// The dataset is empty.
    NoData,
    /// The search field is not a key of the first record.
    FieldNotFound {
        field: String,
        /// Keys of the first record, in order.
        available: Vec<String>,
    },
    /// The search ran but nothing matched.
    NoMatches { query: String, field: String },
    /// No email is shared by two or more records.
    NoDuplicates,
}

impl Outcome {
    /// Returns the records if the analysis produced any.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Outcome::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Consumes the outcome and returns its records, if any.
    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            Outcome::Records(records) => Some(records),
            _ => None,
        }
    }
}

/// The user-facing message for informational outcomes.
///
/// `Records` displays its count; callers serialize it instead of printing it.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Records(records) => write!(f, "{} record(s)", records.len()),
            Outcome::NoData => write!(f, "No client data to search."),
            Outcome::FieldNotFound { field, available } => write!(
                f,
                "The field '{}' is not present in the client records. Available fields: {}",
                field,
                available.join(", ")
            ),
            Outcome::NoMatches { query, field } => {
                write!(f, "No matches found for '{}' in '{}'", query, field)
            }
            Outcome::NoDuplicates => write!(f, "No duplicate emails found."),
        }
    }
}
