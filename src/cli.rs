//! CLI interface definitions for the `shift_search` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`Args::to_request`]: the mapping from flags to an explicit [`Request`]
//!
//! # Example
//!
//! ```bash
//! shift_search -s "john" -k full_name --format csv -o results.csv
//! shift_search --duplicates -f data/clients.json,data/clients2.json
//! ```

use crate::logging::LogFormat;
use crate::output::DEFAULT_FORMAT;
use crate::request::{OutputOptions, Request};
use crate::search::DEFAULT_FIELD;
use clap::Parser;
use std::path::PathBuf;

/// Dataset loaded when `--file` is not given.
pub const DEFAULT_DATASET: &str = "data/clients.json";

/// Printed when neither `--search` nor `--duplicates` is given.
pub const NO_COMMAND: &str = "No command given. Use --help to see available options.";

/// Command-line arguments for `shift_search`.
#[derive(Parser, Debug)]
#[command(
    name = "shift_search",
    version,
    about = "Search client records and find duplicate emails",
    override_usage = "shift_search [options]"
)]
pub struct Args {
    /// Search clients by QUERY (case-insensitive substring)
    #[arg(short = 's', long, value_name = "QUERY", conflicts_with = "duplicates")]
    pub search: Option<String>,

    /// Find duplicate emails
    #[arg(long, default_value_t = false)]
    pub duplicates: bool,

    /// Path to JSON dataset; separate several with commas or repeat the flag
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        env = "SHIFT_SEARCH_FILE",
        value_delimiter = ',',
        default_value = DEFAULT_DATASET
    )]
    pub files: Vec<PathBuf>,

    /// Field to search in
    #[arg(short = 'k', long, value_name = "FIELD", default_value = DEFAULT_FIELD)]
    pub key: String,

    /// Output format: json or csv
    #[arg(long, value_name = "FORMAT", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Write results to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Args {
    /// Builds the request these flags describe, or `None` if no command was given.
    pub fn to_request(&self) -> Option<Request> {
        let output = OutputOptions {
            format: self.format.clone(),
            output_path: self.output.clone(),
        };

        if let Some(query) = &self.search {
            Some(Request::Search {
                query: query.clone(),
                field: self.key.clone(),
                output,
            })
        } else if self.duplicates {
            Some(Request::Duplicates { output })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_command() {
        let args = Args::try_parse_from(["shift_search"]).unwrap();
        assert_eq!(args.to_request(), None);
    }

    #[test]
    fn test_search_and_duplicates_conflict() {
        assert!(Args::try_parse_from(["shift_search", "-s", "x", "--duplicates"]).is_err());
    }
}
