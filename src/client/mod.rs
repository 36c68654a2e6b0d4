// file: src/client/mod.rs
// description: DSpace REST API client module exports
// reference: internal module structure

pub mod http;
pub mod items;
pub mod search;
pub mod types;

pub use http::DspaceClient;
pub use items::{API_UNAVAILABLE, ItemDocument};
pub use search::PageStop;
pub use types::MetadataEntry;
