//! Library crate for shift_search
//!
//! This exposes the query engine used by the `shift_search` binary.
//!
//! # Features
//!
//! - **Search**: case-insensitive substring search over any record field
//! - **Duplicate Detection**: records sharing a normalized email address
//! - **Output**: pretty JSON or CSV, to stdout or a file
//!
//! # Modules
//!
//! - [`data`]: the [`Record`] type and the JSON dataset loader
//! - [`matcher`]: per-record field matching
//! - [`search`]: field-scoped search
//! - [`duplicates`]: duplicate email grouping
//! - [`outcome`]: tagged analysis results
//! - [`output`]: JSON and CSV serialization and routing
//! - [`request`]: explicit requests and their dispatch
//! - [`cli`]: command-line interface definitions
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod data;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod outcome;
pub mod output;
pub mod request;
pub mod search;

pub use cli::Args;
pub use data::{Record, load_all, load_records};
pub use duplicates::find_duplicates;
pub use error::{Error, Result};
pub use outcome::Outcome;
pub use output::OutputFormat;
pub use request::{OutputOptions, Request};
pub use search::search;
