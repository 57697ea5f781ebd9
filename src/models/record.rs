//! The incident record: one workplace-accident case covering a date span.

use serde::{Deserialize, Serialize};

/// Provider-assigned audit metadata. Owned by the document store: the
/// accounting and filter layers never read or write these fields, and they
/// are excluded from the document payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Audit {
    pub created_by: String,
    pub created_at: String,
    pub updated_by: String,
    pub updated_at: String,
}

/// One ART incident case.
///
/// `desde`/`hasta` are kept as the raw strings the user entered (several
/// textual formats are accepted); the three `dias_*` fields are derived from
/// them by the accountant. `None` in a derived field means absent/blank;
/// once populated the accountant only replaces it in force mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentRecord {
    /// Store-assigned document id; `None` for unsaved drafts.
    #[serde(skip)]
    pub id: Option<String>,

    // Personnel identity, autofilled from the roster. Opaque strings here.
    pub dni: String,
    pub cuil: String,
    pub legajo: String,
    pub nombre: String,
    pub ubicacion: String,
    pub funcion: String,
    pub area: String,
    pub provincia: String,
    pub region: String,
    pub personal: String,

    // Incident data
    pub fecha: String,
    pub desde: String,
    pub hasta: String,
    pub tipo_accidente: String,
    pub tipo_denuncia: String,
    pub nro_siniestro: String,
    pub cie10: String,
    pub observacion: String,
    pub descripcion: String,
    pub prestador: String,
    pub envio_denuncia: String,

    // Derived day counts
    pub dias_total: Option<i64>,
    pub dias_mes_desde: Option<i64>,
    pub dias_mes_elegido: Option<i64>,

    #[serde(skip)]
    pub audit: Audit,
}

impl IncidentRecord {
    /// `YYYY-MM` slice of the raw start date, used as the month facet.
    /// Lossy on purpose: a record entered as `D/M/YYYY` yields a slice that
    /// matches no real month key and simply never groups.
    pub fn month_key(&self) -> &str {
        self.desde.get(0..7).unwrap_or("")
    }

    pub fn dias_total_str(&self) -> String {
        self.dias_total.map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn dias_mes_desde_str(&self) -> String {
        self.dias_mes_desde
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn dias_mes_elegido_str(&self) -> String {
        self.dias_mes_elegido
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}
