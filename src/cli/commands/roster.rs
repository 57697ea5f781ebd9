use crate::cli::commands::snapshot_cache;
use crate::cli::parser::{Commands, RosterAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::IncidentRecord;
use crate::models::roster::RosterSnapshot;
use crate::roster::{RosterIndex, apply_roster_row, import};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { action } = cmd {
        match action {
            RosterAction::Import { file, version } => import_roster(cfg, file, version),
            RosterAction::Lookup { dni } => lookup(cfg, dni),
            RosterAction::Info => print_info(cfg),
            RosterAction::Clear => {
                snapshot_cache(cfg).clear()?;
                success("Roster cache cleared.");
                Ok(())
            }
        }
    } else {
        Ok(())
    }
}

fn import_roster(cfg: &Config, file: &str, version: &Option<String>) -> AppResult<()> {
    let rows = import::read_roster_csv(Path::new(file))?;

    if rows.is_empty() {
        warning("The roster file has no rows.");
        return Ok(());
    }

    let index = RosterIndex::build(&rows);
    info(format!(
        "Rows: {} | Indexed (DNI): {}",
        index.row_count, index.indexed_count
    ));

    let snapshot = RosterSnapshot::new(rows, version.clone());
    snapshot_cache(cfg).persist(&snapshot)?;

    match version {
        Some(v) => success(format!("Roster cached (version {v}).")),
        None => success("Roster cached."),
    }
    Ok(())
}

fn lookup(cfg: &Config, dni: &str) -> AppResult<()> {
    let Some(snapshot) = snapshot_cache(cfg).restore()? else {
        warning("No cached roster on this machine. Import one first.");
        return Ok(());
    };

    let index = RosterIndex::build(&snapshot.rows);
    match index.lookup(dni) {
        None => warning("DNI not found in the roster."),
        Some(row) => {
            // Show the row as it would land on a record form.
            let mut record = IncidentRecord::default();
            apply_roster_row(&mut record, row);

            success("Found:");
            println!("DNI: {} | CUIL: {} | Legajo: {}", record.dni, record.cuil, record.legajo);
            println!("Nombre: {}", record.nombre);
            println!(
                "Ubicacion: {} | Funcion: {} | Area: {}",
                record.ubicacion, record.funcion, record.area
            );
            println!(
                "Provincia: {} | Region: {} | Personal: {}",
                record.provincia, record.region, record.personal
            );
        }
    }
    Ok(())
}

fn print_info(cfg: &Config) -> AppResult<()> {
    match snapshot_cache(cfg).restore()? {
        None => info("No cached roster on this machine."),
        Some(snapshot) => {
            let index = RosterIndex::build(&snapshot.rows);
            println!("Saved at: {}", snapshot.saved_at);
            println!(
                "Version:  {}",
                snapshot.version.as_deref().unwrap_or("(none)")
            );
            println!("Rows: {} | Indexed (DNI): {}", index.row_count, index.indexed_count);
        }
    }
    Ok(())
}
