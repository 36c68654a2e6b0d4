// file: src/extractor/patterns.rs
// description: compiled regex patterns for identifier extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Canonical 8-4-4-4-12 textual form, version and variant bits unchecked
    pub static ref UUID: Regex = Regex::new(
        r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
    ).expect("UUID regex is valid");
}
