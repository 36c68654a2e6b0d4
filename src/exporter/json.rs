// file: src/exporter/json.rs
// description: json export of flattened metadata records

use crate::error::Result;
use crate::models::FlatRecord;

/// Pretty-printed UTF-8 JSON array; non-ASCII text is written as-is.
pub fn to_json(records: &[FlatRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}
