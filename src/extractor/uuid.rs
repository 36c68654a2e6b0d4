// file: src/extractor/uuid.rs
// description: item identifier extraction from urls and free text
// reference: lexical match only, no version or variant validation

use crate::error::{HarvestError, Result};
use crate::extractor::patterns::UUID;

/// Returns the first UUID-shaped substring of `text`, as it appears in the input.
pub fn extract_uuid(text: &str) -> Result<String> {
    UUID.find(text)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| HarvestError::UuidNotFound(text.to_string()))
}

/// Every UUID-shaped substring of `text`, in order of appearance.
pub fn extract_all_uuids(text: &str) -> Vec<String> {
    UUID.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
