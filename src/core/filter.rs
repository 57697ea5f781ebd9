//! Multi-predicate filtering over the in-memory record set, plus facet
//! derivation for the filter option lists.
//!
//! All active criteria compose by logical AND. An absent or empty criterion
//! never narrows the result, and filtering is stable: records keep their
//! input order.

use crate::models::record::IncidentRecord;

/// Exact-match facet criteria plus free-text substring criteria.
#[derive(Debug, Default, Clone)]
pub struct FilterCriteria {
    pub provincia: Option<String>,
    pub area: Option<String>,
    /// Month facet, compared against the record's derived `YYYY-MM` key.
    pub mes: Option<String>,
    /// Exact total-day-count value, as entered.
    pub dias_total: Option<String>,
    pub observacion: Option<String>,
    pub personal: Option<String>,
    pub text: TextFilters,
}

/// Case-insensitive substring filters, one per searchable column.
#[derive(Debug, Default, Clone)]
pub struct TextFilters {
    pub desde: Option<String>,
    pub hasta: Option<String>,
    pub dni: Option<String>,
    pub nombre: Option<String>,
    pub provincia: Option<String>,
    pub area: Option<String>,
    pub ubicacion: Option<String>,
    pub dias_total: Option<String>,
    pub dias_mes: Option<String>,
    pub observacion: Option<String>,
    pub siniestro: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        let facets = [
            &self.provincia,
            &self.area,
            &self.mes,
            &self.dias_total,
            &self.observacion,
            &self.personal,
        ];
        facets.iter().all(|f| is_blank(f)) && self.text.is_empty()
    }
}

impl TextFilters {
    pub fn is_empty(&self) -> bool {
        [
            &self.desde,
            &self.hasta,
            &self.dni,
            &self.nombre,
            &self.provincia,
            &self.area,
            &self.ubicacion,
            &self.dias_total,
            &self.dias_mes,
            &self.observacion,
            &self.siniestro,
        ]
        .iter()
        .all(|f| is_blank(f))
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn facet_matches(value: &str, wanted: &Option<String>) -> bool {
    match wanted {
        Some(w) if !w.is_empty() => value == w,
        _ => true,
    }
}

fn text_matches(value: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(n) if !n.trim().is_empty() => value
            .to_lowercase()
            .contains(&n.trim().to_lowercase()),
        _ => true,
    }
}

pub fn record_matches(r: &IncidentRecord, c: &FilterCriteria) -> bool {
    facet_matches(&r.provincia, &c.provincia)
        && facet_matches(&r.area, &c.area)
        && facet_matches(r.month_key(), &c.mes)
        && facet_matches(&r.dias_total_str(), &c.dias_total)
        && facet_matches(&r.observacion, &c.observacion)
        && facet_matches(&r.personal, &c.personal)
        && text_matches(&r.desde, &c.text.desde)
        && text_matches(&r.hasta, &c.text.hasta)
        && text_matches(&r.dni, &c.text.dni)
        && text_matches(&r.nombre, &c.text.nombre)
        && text_matches(&r.provincia, &c.text.provincia)
        && text_matches(&r.area, &c.text.area)
        && text_matches(&r.ubicacion, &c.text.ubicacion)
        && text_matches(&r.dias_total_str(), &c.text.dias_total)
        && text_matches(&r.dias_mes_desde_str(), &c.text.dias_mes)
        && text_matches(&r.observacion, &c.text.observacion)
        && text_matches(&r.nro_siniestro, &c.text.siniestro)
}

/// Order-preserving filter of the working set.
pub fn apply_filters(records: &[IncidentRecord], criteria: &FilterCriteria) -> Vec<IncidentRecord> {
    records
        .iter()
        .filter(|r| record_matches(r, criteria))
        .cloned()
        .collect()
}

/// Distinct values available for each facet, recomputed from the current
/// record set whenever it changes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Facets {
    pub provincias: Vec<String>,
    pub areas: Vec<String>,
    pub observaciones: Vec<String>,
    pub personal: Vec<String>,
    pub meses: Vec<String>,
    pub dias_totales: Vec<i64>,
}

pub fn derive_facets(records: &[IncidentRecord]) -> Facets {
    Facets {
        provincias: distinct(records.iter().map(|r| r.provincia.as_str())),
        areas: distinct(records.iter().map(|r| r.area.as_str())),
        observaciones: distinct(records.iter().map(|r| r.observacion.as_str())),
        personal: distinct(records.iter().map(|r| r.personal.as_str())),
        meses: distinct(records.iter().map(|r| r.month_key())),
        dias_totales: {
            let mut v: Vec<i64> = records.iter().filter_map(|r| r.dias_total).collect();
            v.sort_unstable();
            v.dedup();
            v
        },
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut v: Vec<String> = values
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    v.sort();
    v.dedup();
    v
}
