use crate::auth;
use crate::cli::commands::{load_roster_index, month_selection, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accountant::{reconcile_record, resolve_reference_month};
use crate::errors::{AppError, AppResult};
use crate::models::record::IncidentRecord;
use crate::roster::{apply_roster_row, normalize_identity};
use crate::store::DocumentStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

/// Register a new incident record.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        dni,
        desde,
        hasta,
        fecha,
        mes,
        no_autofill,
        fields,
    } = cmd
    {
        //
        // 1. Validate the mandatory inputs
        //
        let dni_norm = normalize_identity(dni);
        if dni_norm.is_empty() {
            return Err(AppError::Other(format!("'{dni}' is not a usable DNI")));
        }
        if date::parse_date(desde).is_none() {
            return Err(AppError::InvalidDate(desde.clone()));
        }

        //
        // 2. Start from a draft, autofilled from the cached roster
        //
        let mut record = IncidentRecord::default();

        if !*no_autofill {
            match load_roster_index(cfg) {
                Ok(Some(index)) => match index.lookup(&dni_norm) {
                    Some(row) => {
                        apply_roster_row(&mut record, row);
                        info("Personnel data autofilled from the cached roster.");
                    }
                    None => warning("DNI not found in the cached roster."),
                },
                Ok(None) => {}
                Err(e) => warning(format!("{e}; continuing without autofill.")),
            }
        }
        record.dni = dni_norm;

        //
        // 3. Explicit flags win over autofilled values
        //
        fields.apply_to(&mut record);
        record.desde = desde.clone();
        if let Some(h) = hasta {
            record.hasta = h.clone();
        }
        if let Some(f) = fecha {
            record.fecha = f.clone();
        }

        //
        // 4. Recompute day counts on save
        //
        let selection = month_selection(mes, &None, cfg)?;
        let reference = resolve_reference_month(&selection, &cfg.features);
        reconcile_record(&mut record, reference, true);

        //
        // 5. Persist
        //
        let store = open_store(cfg)?;
        let user = auth::current_user(cfg);
        let id = store.create(&record, &user).await?;

        success(format!("Record saved with id {id}"));
    }

    Ok(())
}
