//! Main entry point for the `shift_search` CLI application.
//!
//! `shift_search` loads client records from one or more JSON files and runs
//! one read-only analysis over them.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads the dataset(s) with [`load_all`]
//! - Runs a search or duplicate detection and writes the results
//!
//! # Flags of Interest
//! - `-s QUERY`: search the `-k FIELD` field (default `full_name`)
//! - `--duplicates`: list records sharing an email address
//! - `--format json|csv`, `-o FILE`: output format and destination

use anyhow::{Context, Result};
use clap::Parser;
use shift_search::cli::{Args, NO_COMMAND};
use shift_search::{load_all, logging, request};
use std::process;
use tracing::debug;

fn try_main(args: &Args) -> Result<()> {
    logging::init(args.verbose, args.log_format).context("Failed to initialise logging")?;

    // Parse args → load → analyze → serialize
    let Some(request) = args.to_request() else {
        println!("{}", NO_COMMAND);
        return Ok(());
    };

    let records = load_all(&args.files).context("Error loading data")?;
    debug!(files = args.files.len(), records = records.len(), "dataset ready");

    request::run(&request, &records).context("Error")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = try_main(&args) {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
