//! Output serialization for analysis results.
//!
//! Both analyses hand their records to [`output`], which renders them in the
//! requested format and routes the text to a file or to standard output.
//!
//! # Available Formats
//!
//! - **JSON**: pretty-printed array, keys in record order
//! - **CSV**: header row from the first record, one row per record

pub mod csv;
pub mod json;

use crate::data::Record;
use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Format used when none is given on the command line.
pub const DEFAULT_FORMAT: &str = "json";

/// Supported output formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders records in the given format without writing them anywhere.
pub fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::render(records),
        OutputFormat::Csv => csv::render(records),
    }
}

/// Renders `records` and writes them to `output_path` or standard output.
///
/// See [`output_to`] for the routing rules.
pub fn output(records: &[Record], format: &str, output_path: Option<&Path>) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output_to(records, format, output_path, &mut handle)
}

/// Renders `records` and routes the text.
///
/// With `output_path`, the file receives exactly the rendered text and
/// `console` gets a `Results saved to <path>` line. Without it, `console`
/// gets the rendered text ending in exactly one newline, added only when the
/// text lacks one. Empty text prints a bare newline.
///
/// # Errors
/// * [`Error::UnsupportedFormat`] for a format name other than `json`/`csv`
/// * [`Error::OutputWrite`] if the file cannot be written
pub fn output_to<W: Write>(
    records: &[Record],
    format: &str,
    output_path: Option<&Path>,
    console: &mut W,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let rendered = render(records, format)?;

    match output_path {
        Some(path) => {
            fs::write(path, rendered.as_bytes()).map_err(|source| Error::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), %format, records = records.len(), "results written");
            writeln!(console, "Results saved to {}", path.display())?;
        }
        None => {
            console.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                console.write_all(b"\n")?;
            }
        }
    }
    console.flush()?;
    Ok(())
}
