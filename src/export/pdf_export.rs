// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{pdf_headers, records_to_pdf_table};
use crate::export::pdf::PdfReport;
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use chrono::Local;
use std::io;
use std::path::Path;

/// PDF export with the reduced report column set.
pub(crate) fn export_pdf(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = pdf_headers();
    let data_vec = records_to_pdf_table(records);
    let stamp = format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M"));

    let mut pdf = PdfReport::new();
    pdf.write_table("Registros Casos ART - Reporte", &stamp, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
