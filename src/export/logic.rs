// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::record::IncidentRecord;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export entry point. Consumes the already-filtered record
/// sequence read-only; filtering itself happens upstream.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        records: &[IncidentRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("⚠️  No records found for the selected filters.");
            return Ok(());
        }

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from_record).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => export_pdf(&rows, path)?,
        }

        Ok(())
    }
}
