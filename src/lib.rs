// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod labels;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use client::{DspaceClient, ItemDocument, MetadataEntry, PageStop};
pub use config::{Config, ExportConfig, ExtractionConfig, LabelRule, RepositoryConfig};
pub use error::{HarvestError, Result};
pub use exporter::{ExportFormat, Exporter, SheetTable, export_filename, to_json, to_sheet};
pub use extractor::{extract_all_uuids, extract_uuid};
pub use labels::{TranslationTable, translate};
pub use models::{FieldValue, FlatRecord, ItemSummary, SearchMode};
pub use pipeline::{ExtractionStats, HarvestOutcome, Harvester, ProgressTracker};
pub use utils::{HealthCheck, HealthStatus, OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let table = TranslationTable::with_overrides(&config.labels);
        assert_eq!(table.translate("dc.title"), translate("dc.title"));
        assert_eq!(ExportFormat::default(), config.export.default_format);
    }
}
