//! Identity-number lookup over an imported roster.
//!
//! Keys are normalized to digits only, so "20.123.456" and "20123456" land
//! on the same entry. Rows without a usable identity are skipped silently,
//! and a duplicated identity keeps the later row (last write wins).

use crate::models::record::IncidentRecord;
use crate::models::roster::RosterRow;
use std::collections::HashMap;

/// Strip everything but ASCII digits.
pub fn normalize_identity(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// Header spellings the identity column may arrive under. When none match,
// the canonical spelling is assumed and lookups simply miss.
const IDENTITY_HEADERS: [&str; 3] = ["DNI", "Dni", "dni"];
const DEFAULT_IDENTITY_HEADER: &str = "DNI";

fn detect_identity_column(rows: &[RosterRow]) -> &'static str {
    let Some(first) = rows.first() else {
        return DEFAULT_IDENTITY_HEADER;
    };
    IDENTITY_HEADERS
        .iter()
        .find(|h| first.contains_key(**h))
        .copied()
        .unwrap_or(DEFAULT_IDENTITY_HEADER)
}

#[derive(Debug, Default)]
pub struct RosterIndex {
    map: HashMap<String, RosterRow>,
    pub row_count: usize,
    pub indexed_count: usize,
}

impl RosterIndex {
    pub fn build(rows: &[RosterRow]) -> Self {
        let column = detect_identity_column(rows);

        let mut map = HashMap::new();
        for row in rows {
            let key = normalize_identity(row.get(column).map(String::as_str).unwrap_or(""));
            if key.is_empty() {
                continue;
            }
            map.insert(key, row.clone());
        }

        Self {
            row_count: rows.len(),
            indexed_count: map.len(),
            map,
        }
    }

    /// A miss is a normal negative result, not an error.
    pub fn lookup(&self, dni: &str) -> Option<&RosterRow> {
        self.map.get(&normalize_identity(dni))
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Destination fields a roster lookup populates. Cleared before every new
/// lookup so values from a previous match never survive; the DNI itself is
/// the search key and is left alone.
fn clear_roster_fields(record: &mut IncidentRecord) {
    record.cuil.clear();
    record.legajo.clear();
    record.nombre.clear();
    record.ubicacion.clear();
    record.funcion.clear();
    record.area.clear();
    record.provincia.clear();
    record.region.clear();
    record.personal.clear();
}

/// Copy a matched roster row into the record's personnel fields. Columns
/// outside the fixed mapping are ignored; mapped destinations whose source
/// column is absent stay cleared.
pub fn apply_roster_row(record: &mut IncidentRecord, row: &RosterRow) {
    clear_roster_fields(record);

    for (column, value) in row {
        let slot = match column.as_str() {
            "DNI" => &mut record.dni,
            "CUIL" => &mut record.cuil,
            "Legajo" => &mut record.legajo,
            "Apellido y Nombre" => &mut record.nombre,
            "Unidad organizativa" => &mut record.ubicacion,
            "Posición" => &mut record.funcion,
            "Area" => &mut record.area,
            "Provincia" => &mut record.provincia,
            "Región (Estado federal, \"land\"" => &mut record.region,
            "RRHH" => &mut record.personal,
            _ => continue,
        };
        *slot = value.clone();
    }
}
