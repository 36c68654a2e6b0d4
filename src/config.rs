// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HarvestError, Result};
use crate::exporter::ExportFormat;
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub repository: RepositoryConfig,
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
    /// Extra or overriding entries for the label table.
    #[serde(default)]
    pub labels: Vec<LabelRule>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelRule {
    pub field: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepositoryConfig {
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_search_timeout")]
    pub search_timeout_secs: u64,
    #[serde(default = "default_item_timeout")]
    pub item_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_workers")]
    pub parallel_workers: usize,
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_page_size() -> usize {
    20
}

fn default_search_timeout() -> u64 {
    10
}

fn default_item_timeout() -> u64 {
    30
}

fn default_workers() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl RepositoryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: default_page_size(),
            search_timeout_secs: default_search_timeout(),
            item_timeout_secs: default_item_timeout(),
        }
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    pub fn item_timeout(&self) -> Duration {
        Duration::from_secs(self.item_timeout_secs)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("repository.base_url", defaults.repository.base_url.clone())
            .and_then(|b| b.set_default("export.output_dir", "./exports"))
            .and_then(|b| b.set_default("extraction.parallel_workers", 5))
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DSPACE_HARVEST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            repository: RepositoryConfig::new("https://repository.ucatolica.edu.co"),
            extraction: ExtractionConfig {
                parallel_workers: default_workers(),
                show_progress: true,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                default_format: ExportFormat::Json,
            },
            labels: vec![],
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.repository.base_url)
            .map_err(|e| HarvestError::Config(e.to_string()))?;
        Validator::validate_page_size(self.repository.page_size)
            .map_err(|e| HarvestError::Config(e.to_string()))?;
        Validator::validate_workers(self.extraction.parallel_workers)
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        if self.repository.search_timeout_secs == 0 || self.repository.item_timeout_secs == 0 {
            return Err(HarvestError::Config(
                "timeouts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.repository.page_size, 20);
        assert_eq!(config.repository.search_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("harvest.toml");
        fs::write(
            &path,
            r#"
[repository]
base_url = "https://demo.dspace.org"
item_timeout_secs = 5

[extraction]
parallel_workers = 2

[export]
output_dir = "out"
default_format = "xlsx"

[[labels]]
field = "dc.subject.ods"
label = "Objetivo ODS"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.repository.base_url, "https://demo.dspace.org");
        assert_eq!(config.repository.item_timeout_secs, 5);
        assert_eq!(config.repository.search_timeout_secs, 10);
        assert_eq!(config.extraction.parallel_workers, 2);
        assert_eq!(config.export.default_format, ExportFormat::Xlsx);
        assert_eq!(config.labels.len(), 1);
        assert_eq!(config.labels[0].field, "dc.subject.ods");
        assert_eq!(config.labels[0].label, "Objetivo ODS");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default_config();
        config.repository.base_url = "repository.example.org".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.extraction.parallel_workers = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.repository.search_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
