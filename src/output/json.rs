//! JSON renderer.

use crate::data::Record;
use crate::error::Result;

/// Renders records as a pretty-printed JSON array.
///
/// Two-space indentation, keys in record order, no trailing newline. An empty
/// slice renders as `[]`.
pub fn render(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
