// src/export/model.rs

use crate::models::record::IncidentRecord;
use serde::Serialize;

/// Flat row for record exports. Day counts are printed as strings so blank
/// (never computed) stays blank instead of becoming 0.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: String,
    pub dni: String,
    pub cuil: String,
    pub legajo: String,
    pub nombre: String,
    pub provincia: String,
    pub area: String,
    pub ubicacion: String,
    pub region: String,
    pub personal: String,
    pub fecha: String,
    pub desde: String,
    pub hasta: String,
    pub dias_total: String,
    pub dias_mes_desde: String,
    pub dias_mes_elegido: String,
    pub tipo_accidente: String,
    pub tipo_denuncia: String,
    pub nro_siniestro: String,
    pub cie10: String,
    pub observacion: String,
    pub descripcion: String,
    pub prestador: String,
    pub envio_denuncia: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_by: String,
    pub updated_at: String,
}

impl RecordExport {
    pub fn from_record(r: &IncidentRecord) -> Self {
        Self {
            id: r.id.clone().unwrap_or_default(),
            dni: r.dni.clone(),
            cuil: r.cuil.clone(),
            legajo: r.legajo.clone(),
            nombre: r.nombre.clone(),
            provincia: r.provincia.clone(),
            area: r.area.clone(),
            ubicacion: r.ubicacion.clone(),
            region: r.region.clone(),
            personal: r.personal.clone(),
            fecha: r.fecha.clone(),
            desde: r.desde.clone(),
            hasta: r.hasta.clone(),
            dias_total: r.dias_total_str(),
            dias_mes_desde: r.dias_mes_desde_str(),
            dias_mes_elegido: r.dias_mes_elegido_str(),
            tipo_accidente: r.tipo_accidente.clone(),
            tipo_denuncia: r.tipo_denuncia.clone(),
            nro_siniestro: r.nro_siniestro.clone(),
            cie10: r.cie10.clone(),
            observacion: r.observacion.clone(),
            descripcion: r.descripcion.clone(),
            prestador: r.prestador.clone(),
            envio_denuncia: r.envio_denuncia.clone(),
            created_by: r.audit.created_by.clone(),
            created_at: r.audit.created_at.clone(),
            updated_by: r.audit.updated_by.clone(),
            updated_at: r.audit.updated_at.clone(),
        }
    }
}

/// Header per CSV / XLSX (full column set, audit included).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "dni",
        "cuil",
        "legajo",
        "nombre",
        "provincia",
        "area",
        "ubicacion",
        "region",
        "personal",
        "fecha",
        "desde",
        "hasta",
        "dias_total",
        "dias_mes_desde",
        "dias_mes_elegido",
        "tipo_accidente",
        "tipo_denuncia",
        "nro_siniestro",
        "cie10",
        "observacion",
        "descripcion",
        "prestador",
        "envio_denuncia",
        "created_by",
        "created_at",
        "updated_by",
        "updated_at",
    ]
}

pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.dni.clone(),
        e.cuil.clone(),
        e.legajo.clone(),
        e.nombre.clone(),
        e.provincia.clone(),
        e.area.clone(),
        e.ubicacion.clone(),
        e.region.clone(),
        e.personal.clone(),
        e.fecha.clone(),
        e.desde.clone(),
        e.hasta.clone(),
        e.dias_total.clone(),
        e.dias_mes_desde.clone(),
        e.dias_mes_elegido.clone(),
        e.tipo_accidente.clone(),
        e.tipo_denuncia.clone(),
        e.nro_siniestro.clone(),
        e.cie10.clone(),
        e.observacion.clone(),
        e.descripcion.clone(),
        e.prestador.clone(),
        e.envio_denuncia.clone(),
        e.created_by.clone(),
        e.created_at.clone(),
        e.updated_by.clone(),
        e.updated_at.clone(),
    ]
}

/// Reduced column set for the PDF report, which has far less width to work
/// with even in landscape.
pub(crate) fn pdf_headers() -> Vec<&'static str> {
    vec![
        "DNI",
        "Nombre",
        "Provincia",
        "Area",
        "Ubicacion",
        "Desde",
        "Hasta",
        "Dias",
        "Dias Mes",
        "Obs",
        "Siniestro",
    ]
}

pub(crate) fn record_to_pdf_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.dni.clone(),
        e.nombre.clone(),
        e.provincia.clone(),
        e.area.clone(),
        e.ubicacion.clone(),
        e.desde.clone(),
        e.hasta.clone(),
        e.dias_total.clone(),
        e.dias_mes_desde.clone(),
        e.observacion.clone(),
        e.nro_siniestro.clone(),
    ]
}

pub(crate) fn records_to_table(records: &[RecordExport]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}

pub(crate) fn records_to_pdf_table(records: &[RecordExport]) -> Vec<Vec<String>> {
    records.iter().map(record_to_pdf_row).collect()
}
