//! Explicit analysis requests and their dispatch.
//!
//! A [`Request`] carries everything one invocation needs after the dataset is
//! loaded. [`run`] executes it: one analysis, then either the serialized
//! records or the informational message.

use crate::data::Record;
use crate::duplicates::find_duplicates;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::output::{DEFAULT_FORMAT, output_to};
use crate::search::{DEFAULT_FIELD, search};
use std::io::{self, Write};
use std::path::PathBuf;

/// Where and how to write results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Format name, `json` or `csv`. Unknown names fail at serialization.
    pub format: String,
    /// Write to this file instead of standard output.
    pub output_path: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            output_path: None,
        }
    }
}

/// A single analysis to run against the loaded records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search {
        query: String,
        field: String,
        output: OutputOptions,
    },
    Duplicates {
        output: OutputOptions,
    },
}

impl Request {
    /// A search over the default field with default output options.
    pub fn search(query: impl Into<String>) -> Self {
        Request::Search {
            query: query.into(),
            field: DEFAULT_FIELD.to_string(),
            output: OutputOptions::default(),
        }
    }

    /// Duplicate detection with default output options.
    pub fn duplicates() -> Self {
        Request::Duplicates {
            output: OutputOptions::default(),
        }
    }

    /// Runs the analysis without producing any output.
    pub fn analyze(&self, records: &[Record]) -> Outcome {
        match self {
            Request::Search { query, field, .. } => search(records, query, field),
            Request::Duplicates { .. } => find_duplicates(records),
        }
    }

    pub fn output_options(&self) -> &OutputOptions {
        match self {
            Request::Search { output, .. } | Request::Duplicates { output } => output,
        }
    }
}

/// Runs `request` and writes the result to standard output (or its file).
pub fn run(request: &Request, records: &[Record]) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with(request, records, &mut handle)
}

/// Runs `request`, writing console text to `console`.
///
/// Records are serialized via [`output_to`]; informational outcomes print
/// their message. The outcome is returned so callers can inspect it.
pub fn run_with<W: Write>(
    request: &Request,
    records: &[Record],
    console: &mut W,
) -> Result<Outcome> {
    let outcome = request.analyze(records);
    match outcome.records() {
        Some(results) => {
            let options = request.output_options();
            output_to(
                results,
                &options.format,
                options.output_path.as_deref(),
                console,
            )?;
        }
        None => {
            writeln!(console, "{}", outcome)?;
            console.flush()?;
        }
    }
    Ok(outcome)
}
