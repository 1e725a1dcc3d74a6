//! Client records and the dataset loader.
//!
//! A [`Record`] is an insertion-ordered JSON object. The loader reads one or
//! more JSON files whose top-level value is an array of objects and hands the
//! records back in file order.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// One client entry: field name to JSON value, keys kept in file order.
pub type Record = Map<String, Value>;

/// Loads the records of a single JSON dataset.
///
/// # Errors
/// * [`Error::FileNotFound`] if `path` does not exist
/// * [`Error::NotJson`] if the first non-whitespace byte is not `{` or `[`
/// * [`Error::Parse`] if the document is malformed or not an array of objects
/// * [`Error::Read`] for any other I/O failure
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = parse_records(&bytes, path)?;
    debug!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Loads every dataset in `paths` and concatenates their records in order.
///
/// The first file that fails to load aborts the whole load.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_records(path)?);
    }
    Ok(records)
}

fn parse_records(bytes: &[u8], path: &Path) -> Result<Vec<Record>> {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') | Some(b'[') => {}
        _ => {
            return Err(Error::NotJson {
                path: path.to_path_buf(),
            });
        }
    }

    serde_json::from_slice(bytes).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &[u8]) -> Result<Vec<Record>> {
        parse_records(text, &PathBuf::from("inline.json"))
    }

    #[test]
    fn test_parse_keeps_key_order() {
        let records = parse(br#"[{"zeta": 1, "alpha": "a", "mid": null}]"#).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_leading_whitespace_is_allowed() {
        let records = parse(b"\n\t  []").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_document_is_not_json() {
        assert!(matches!(parse(b""), Err(Error::NotJson { .. })));
        assert!(matches!(parse(b"   \n"), Err(Error::NotJson { .. })));
    }

    #[test]
    fn test_binary_is_not_json() {
        let png_header = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        assert!(matches!(parse(&png_header), Err(Error::NotJson { .. })));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse(b"[{\"a\": }]"), Err(Error::Parse { .. })));
        // A lone object is JSON but not a list of records.
        assert!(matches!(parse(b"{\"a\": 1}"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        assert!(matches!(
            parse(b"[{\"a\": \"\xff\xfe\"}]"),
            Err(Error::Parse { .. })
        ));
    }
}
