use clap::Parser;
use shift_search::cli::Args;
use shift_search::logging::LogFormat;
use shift_search::{OutputOptions, Request};
use std::path::PathBuf;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).expect("arguments should parse")
}

#[test]
fn test_search_defaults() {
    let args = parse(&["shift_search", "-s", "John Doe"]);
    assert_eq!(args.files, vec![PathBuf::from("data/clients.json")]);
    assert_eq!(args.log_format, LogFormat::Pretty);
    assert_eq!(args.to_request(), Some(Request::search("John Doe")));
}

#[test]
fn test_search_with_every_option() {
    let args = parse(&[
        "shift_search",
        "--search=john",
        "-k",
        "email",
        "--format=csv",
        "-o",
        "out.csv",
    ]);
    assert_eq!(
        args.to_request(),
        Some(Request::Search {
            query: "john".into(),
            field: "email".into(),
            output: OutputOptions {
                format: "csv".into(),
                output_path: Some(PathBuf::from("out.csv")),
            },
        })
    );
}

#[test]
fn test_duplicates_over_several_files() {
    let args = parse(&[
        "shift_search",
        "--duplicates",
        "-f",
        "data/clients.json,data/clients2.json",
        "--file",
        "data/more.json",
    ]);
    assert_eq!(
        args.files,
        vec![
            PathBuf::from("data/clients.json"),
            PathBuf::from("data/clients2.json"),
            PathBuf::from("data/more.json"),
        ]
    );
    assert_eq!(args.to_request(), Some(Request::duplicates()));
}

#[test]
fn test_unknown_format_is_accepted_at_parse_time() {
    let args = parse(&["shift_search", "-s", "x", "--format", "xml"]);
    let request = args.to_request().unwrap();
    assert_eq!(request.output_options().format, "xml");
}

#[test]
fn test_verbosity_counts() {
    assert_eq!(parse(&["shift_search", "-vv"]).verbose, 2);
    assert_eq!(
        parse(&["shift_search", "--log-format", "json"]).log_format,
        LogFormat::Json
    );
}
