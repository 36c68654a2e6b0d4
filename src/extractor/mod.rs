// file: src/extractor/mod.rs
// description: identifier extraction module exports
// reference: internal module structure

pub mod patterns;
pub mod uuid;

pub use uuid::{extract_all_uuids, extract_uuid};
