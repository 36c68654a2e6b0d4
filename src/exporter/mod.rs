// file: src/exporter/mod.rs
// description: export formats, file naming and writing to the output directory
// reference: internal module structure

pub mod json;
pub mod sheet;

use crate::error::{HarvestError, Result};
use crate::models::FlatRecord;
use crate::utils::validation::Validator;
use chrono::{DateTime, Local, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::{info, warn};

pub use json::to_json;
pub use sheet::{SHEET_NAME, SheetTable, to_sheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    #[value(alias = "excel")]
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    pub fn render(&self, records: &[FlatRecord]) -> Result<Vec<u8>> {
        match self {
            ExportFormat::Json => to_json(records),
            ExportFormat::Xlsx => to_sheet(records),
        }
    }
}

/// `metadatos_<YYYYMMDD_HHMMSS>.<ext>`
pub fn export_filename<Tz: TimeZone>(format: ExportFormat, timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "metadatos_{}.{}",
        timestamp.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        Validator::validate_output_dir(&output_dir)?;
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes a new export file. An existing file with the same name is never overwritten.
    pub fn write(&self, format: ExportFormat, records: &[FlatRecord]) -> Result<PathBuf> {
        self.write_at(format, records, &Local::now())
    }

    pub fn write_at<Tz: TimeZone>(
        &self,
        format: ExportFormat,
        records: &[FlatRecord],
        timestamp: &DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        if records.is_empty() {
            return Err(HarvestError::NoSelection);
        }

        let bytes = format.render(records)?;
        let path = self.output_dir.join(export_filename(format, timestamp));

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!("Export {} already exists, not overwriting", path.display());
                return Err(HarvestError::Validation(format!(
                    "Export file already exists: {}",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(&bytes)?;

        info!(
            "Exported {} records ({} bytes) to {}",
            records.len(),
            bytes.len(),
            path.display()
        );
        Ok(path)
    }
}
