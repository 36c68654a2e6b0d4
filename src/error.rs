// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No UUID found in input: {0}")]
    UuidNotFound(String),

    #[error("Repository API unavailable for {uuid}: {message}")]
    ApiUnavailable { uuid: String, message: String },

    #[error("No items selected")]
    NoSelection,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

impl HarvestError {
    /// Message stored in the inline `Error` field of a failed record.
    pub fn record_message(&self) -> String {
        match self {
            HarvestError::ApiUnavailable { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
