//! Roster file import: one CSV becomes an ordered sequence of
//! header-to-value rows. Rows are opaque until the index is built.

use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterRow;
use std::path::Path;

/// Read every row of a roster CSV. Short rows are padded with empty strings
/// so each row exposes every header.
pub fn read_roster_csv(path: &Path) -> AppResult<Vec<RosterRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::RosterImport(format!("cannot open {}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::RosterImport(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| AppError::RosterImport(e.to_string()))?;
        let mut row = RosterRow::new();
        for (i, header) in headers.iter().enumerate() {
            row.insert(header.clone(), record.get(i).unwrap_or("").to_string());
        }
        rows.push(row);
    }

    Ok(rows)
}
