// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{HarvestError, Result};
use std::path::Path;

/// Upper bound DSpace accepts for the `size` parameter of discovery queries.
const MAX_PAGE_SIZE: usize = 100;
const MAX_WORKERS: usize = 32;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(HarvestError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_page_size(size: usize) -> Result<()> {
        if size == 0 {
            return Err(HarvestError::Validation(
                "Page size must be greater than 0".to_string(),
            ));
        }

        if size > MAX_PAGE_SIZE {
            return Err(HarvestError::Validation(format!(
                "Page size too large (max {})",
                MAX_PAGE_SIZE
            )));
        }

        Ok(())
    }

    pub fn validate_workers(workers: usize) -> Result<()> {
        if workers == 0 || workers > MAX_WORKERS {
            return Err(HarvestError::Validation(format!(
                "parallel_workers must be between 1 and {}",
                MAX_WORKERS
            )));
        }
        Ok(())
    }

    pub fn validate_query(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(HarvestError::Validation("Query is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_output_dir(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(HarvestError::Validation(format!(
                "Output path is not a directory: {}",
                path.display()
            )));
        }
        Ok(())
    }

    pub fn trim_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }
}
