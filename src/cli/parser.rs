use crate::core::filter::{FilterCriteria, TextFilters};
use crate::export::ExportFormat;
use crate::models::record::IncidentRecord;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for artrack
/// CLI application to track workplace-accident (ART) records
#[derive(Parser)]
#[command(
    name = "artrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track ART incident records: day-count accounting, roster autofill and batched deletes",
    long_about = None
)]
pub struct Cli {
    /// Override the record database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the roster-cache database path
    #[arg(global = true, long = "cache")]
    pub cache: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the databases and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Register a new incident record
    Add {
        /// Identity number of the person involved (dots and spaces allowed)
        #[arg(long)]
        dni: String,

        /// Incident span start (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        desde: String,

        /// Incident span end
        #[arg(long)]
        hasta: Option<String>,

        /// Report date
        #[arg(long)]
        fecha: Option<String>,

        /// Month to calculate the chosen-month day count against (YYYY-MM)
        #[arg(long)]
        mes: Option<String>,

        /// Skip roster autofill even when a cached roster exists
        #[arg(long = "no-autofill")]
        no_autofill: bool,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update an existing record (day counts are recomputed on save)
    Update {
        /// Record id as assigned by the store
        id: String,

        #[arg(long)]
        dni: Option<String>,

        #[arg(long)]
        desde: Option<String>,

        #[arg(long)]
        hasta: Option<String>,

        #[arg(long)]
        fecha: Option<String>,

        /// Month to calculate the chosen-month day count against (YYYY-MM)
        #[arg(long)]
        mes: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List records from the store, with filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, help = "Print distinct facet values instead of records")]
        facets: bool,

        #[arg(long, help = "Print every field of each matching record")]
        details: bool,
    },

    /// Delete one record by id, or bulk-delete the history in batches
    Del {
        /// Record id to delete
        id: Option<String>,

        #[arg(long, help = "Bulk-delete records (filters narrow the target set)")]
        all: bool,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, help = "Skip confirmation prompts")]
        yes: bool,
    },

    /// Manage the personnel roster used for autofill
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Export the (filtered) record history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RosterAction {
    /// Import a roster CSV and cache it on this machine
    Import {
        file: String,

        /// Version label stored with the snapshot (e.g. the cut date)
        #[arg(long)]
        version: Option<String>,
    },

    /// Look up one person by identity number
    Lookup { dni: String },

    /// Show cached-snapshot metadata
    Info,

    /// Drop the cached snapshot
    Clear,
}

/// Filters shared by `list`, `del` and `export`. Facet flags match exactly;
/// the `q-*` flags match case-insensitive substrings.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Facet: exact province
    #[arg(long)]
    pub provincia: Option<String>,

    /// Facet: exact area
    #[arg(long)]
    pub area: Option<String>,

    /// Facet: month of the record (YYYY-MM, from the start date)
    #[arg(long)]
    pub mes: Option<String>,

    /// Facet: exact total-day-count value
    #[arg(long)]
    pub dias: Option<String>,

    /// Facet: exact observation category
    #[arg(long = "obs")]
    pub observacion: Option<String>,

    /// Facet: exact personnel category
    #[arg(long)]
    pub personal: Option<String>,

    #[arg(long = "q-dni")]
    pub q_dni: Option<String>,

    #[arg(long = "q-nombre")]
    pub q_nombre: Option<String>,

    #[arg(long = "q-ubicacion")]
    pub q_ubicacion: Option<String>,

    #[arg(long = "q-desde")]
    pub q_desde: Option<String>,

    #[arg(long = "q-hasta")]
    pub q_hasta: Option<String>,

    #[arg(long = "q-siniestro")]
    pub q_siniestro: Option<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            provincia: self.provincia.clone(),
            area: self.area.clone(),
            mes: self.mes.clone(),
            dias_total: self.dias.clone(),
            observacion: self.observacion.clone(),
            personal: self.personal.clone(),
            text: TextFilters {
                dni: self.q_dni.clone(),
                nombre: self.q_nombre.clone(),
                ubicacion: self.q_ubicacion.clone(),
                desde: self.q_desde.clone(),
                hasta: self.q_hasta.clone(),
                siniestro: self.q_siniestro.clone(),
                ..Default::default()
            },
        }
    }
}

/// Optional record fields settable from the command line. Explicit flags win
/// over roster-autofilled values.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub cuil: Option<String>,

    #[arg(long)]
    pub legajo: Option<String>,

    #[arg(long)]
    pub nombre: Option<String>,

    #[arg(long)]
    pub ubicacion: Option<String>,

    #[arg(long)]
    pub funcion: Option<String>,

    #[arg(long)]
    pub area: Option<String>,

    #[arg(long)]
    pub provincia: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub personal: Option<String>,

    /// Accident type code
    #[arg(long = "tipo")]
    pub tipo_accidente: Option<String>,

    /// Report severity
    #[arg(long = "gravedad")]
    pub tipo_denuncia: Option<String>,

    #[arg(long = "siniestro")]
    pub nro_siniestro: Option<String>,

    #[arg(long)]
    pub cie10: Option<String>,

    #[arg(long = "observacion")]
    pub observacion: Option<String>,

    #[arg(long)]
    pub descripcion: Option<String>,

    #[arg(long)]
    pub prestador: Option<String>,

    /// Report submission date/flag
    #[arg(long = "envio")]
    pub envio_denuncia: Option<String>,
}

impl FieldArgs {
    pub fn apply_to(&self, record: &mut IncidentRecord) {
        let pairs: [(&Option<String>, &mut String); 17] = [
            (&self.cuil, &mut record.cuil),
            (&self.legajo, &mut record.legajo),
            (&self.nombre, &mut record.nombre),
            (&self.ubicacion, &mut record.ubicacion),
            (&self.funcion, &mut record.funcion),
            (&self.area, &mut record.area),
            (&self.provincia, &mut record.provincia),
            (&self.region, &mut record.region),
            (&self.personal, &mut record.personal),
            (&self.tipo_accidente, &mut record.tipo_accidente),
            (&self.tipo_denuncia, &mut record.tipo_denuncia),
            (&self.nro_siniestro, &mut record.nro_siniestro),
            (&self.cie10, &mut record.cie10),
            (&self.observacion, &mut record.observacion),
            (&self.descripcion, &mut record.descripcion),
            (&self.prestador, &mut record.prestador),
            (&self.envio_denuncia, &mut record.envio_denuncia),
        ];

        for (flag, slot) in pairs {
            if let Some(value) = flag {
                *slot = value.clone();
            }
        }
    }
}
