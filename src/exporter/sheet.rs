// file: src/exporter/sheet.rs
// description: single-sheet xlsx export of flattened metadata records
// reference: https://docs.rs/rust_xlsxwriter

use crate::error::Result;
use crate::models::FlatRecord;
use rust_xlsxwriter::{Format, Workbook};
use tracing::warn;

pub const SHEET_NAME: &str = "Metadatos";

/// Longest string a single xlsx cell can hold.
const MAX_CELL_CHARS: usize = 32_767;

/// Tabular view of records: header union in first-seen order, one row per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl SheetTable {
    pub fn from_records(records: &[FlatRecord]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for record in records {
            for label in record.labels() {
                if !headers.iter().any(|h| h == label) {
                    headers.push(label.to_string());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| headers.iter().map(|h| record.cell(h)).collect())
            .collect();

        Self { headers, rows }
    }
}

pub fn to_sheet(records: &[FlatRecord]) -> Result<Vec<u8>> {
    let table = SheetTable::from_records(records);

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = (row_idx + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let Some(text) = cell else { continue };
                worksheet.write_string(row_num, col as u16, fit_cell(text, row_num))?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn fit_cell(text: &str, row: u32) -> String {
    if text.chars().count() <= MAX_CELL_CHARS {
        return text.to_string();
    }
    warn!("Cell in row {} exceeds xlsx limit, truncating", row);
    text.chars().take(MAX_CELL_CHARS).collect()
}
