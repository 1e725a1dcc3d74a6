//! Error types for `shift_search`.
//!
//! Informational outcomes such as "no matches" are not errors; they live in
//! [`crate::outcome::Outcome`]. This enum only carries conditions that stop an
//! operation.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Error type for dataset loading, rendering and output.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `FileNotFound` | The dataset path does not exist |
/// | `NotJson` | The dataset does not start with `{` or `[` |
/// | `Parse` | The dataset is malformed JSON or not an array of objects |
/// | `Read` | Any other I/O failure while loading |
/// | `UnsupportedFormat` | The output format name is not `json` or `csv` |
/// | `OutputWrite` | The output file cannot be written |
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse JSON in {}: Expected '{{' or '[' at the start of the document", path.display())]
    NotJson { path: PathBuf },

    #[error("Failed to parse JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV rendering failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns true for failures raised while loading the dataset.
    ///
    /// These abort the whole invocation before any analysis runs.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            Error::FileNotFound { .. }
                | Error::NotJson { .. }
                | Error::Parse { .. }
                | Error::Read { .. }
        )
    }
}

/// Result type alias for `shift_search` operations.
pub type Result<T> = std::result::Result<T, Error>;
