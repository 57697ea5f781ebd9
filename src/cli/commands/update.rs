use crate::auth;
use crate::cli::commands::{month_selection, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accountant::{reconcile_record, resolve_reference_month};
use crate::core::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::roster::normalize_identity;
use crate::store::DocumentStore;
use crate::ui::messages::success;
use crate::utils::date;

/// Update an existing record; day counts are always recomputed on save.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        dni,
        desde,
        hasta,
        fecha,
        mes,
        fields,
    } = cmd
    {
        let store = open_store(cfg)?;
        let working = RecordStore::load(&store).await?;

        let mut record = working
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::RecordNotFound(id.clone()))?;

        if let Some(d) = dni {
            let norm = normalize_identity(d);
            if norm.is_empty() {
                return Err(AppError::Other(format!("'{d}' is not a usable DNI")));
            }
            record.dni = norm;
        }
        if let Some(d) = desde {
            if date::parse_date(d).is_none() {
                return Err(AppError::InvalidDate(d.clone()));
            }
            record.desde = d.clone();
        }
        if let Some(h) = hasta {
            record.hasta = h.clone();
        }
        if let Some(f) = fecha {
            record.fecha = f.clone();
        }
        fields.apply_to(&mut record);

        let selection = month_selection(mes, &None, cfg)?;
        let reference = resolve_reference_month(&selection, &cfg.features);
        reconcile_record(&mut record, reference, true);

        let user = auth::current_user(cfg);
        store.update(id, &record, &user).await?;

        success(format!("Record {id} updated."));
    }

    Ok(())
}
