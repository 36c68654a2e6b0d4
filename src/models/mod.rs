// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod item_summary;
pub mod record;
pub mod search_mode;

pub use item_summary::ItemSummary;
pub use record::{FieldValue, FlatRecord};
pub use search_mode::SearchMode;
