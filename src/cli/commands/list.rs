use crate::cli::commands::{month_selection, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accountant::resolve_reference_month;
use crate::core::records::RecordStore;
use crate::errors::AppResult;
use crate::models::record::IncidentRecord;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filters,
        facets,
        details,
    } = cmd
    {
        let store = open_store(cfg)?;
        let mut working = RecordStore::load(&store).await?;

        // Older records may predate the day-count fields; fill the blanks
        // for display only. The store copy is left as is.
        let selection = month_selection(&None, &filters.mes, cfg)?;
        let reference = resolve_reference_month(&selection, &cfg.features);
        working.backfill_day_counts(reference);

        if *facets {
            print_facets(&working);
            return Ok(());
        }

        let criteria = filters.to_criteria();
        let visible = working.filtered(&criteria);

        info(format!(
            "Showing {} of {} record(s)",
            visible.len(),
            working.len()
        ));

        if visible.is_empty() {
            return Ok(());
        }

        if *details {
            for r in &visible {
                print_details(r);
            }
        } else {
            print_table(&visible);
        }
    }

    Ok(())
}

fn print_table(records: &[IncidentRecord]) {
    let mut table = Table::new(&[
        "ID", "DNI", "Nombre", "Provincia", "Area", "Desde", "Hasta", "Dias", "Dias Mes", "Obs",
        "Siniestro",
    ]);

    for r in records {
        table.add_row(vec![
            r.id.clone().unwrap_or_default(),
            r.dni.clone(),
            r.nombre.clone(),
            r.provincia.clone(),
            r.area.clone(),
            r.desde.clone(),
            r.hasta.clone(),
            r.dias_total_str(),
            r.dias_mes_desde_str(),
            r.observacion.clone(),
            r.nro_siniestro.clone(),
        ]);
    }

    print!("{}", table.render());
}

fn print_details(r: &IncidentRecord) {
    println!("\n=== {} ===", r.id.as_deref().unwrap_or("(unsaved)"));
    println!("DNI: {} | CUIL: {} | Legajo: {}", r.dni, r.cuil, r.legajo);
    println!("Nombre: {}", r.nombre);
    println!(
        "Provincia: {} | Area: {} | Ubicacion: {} | Region: {} | Personal: {}",
        r.provincia, r.area, r.ubicacion, r.region, r.personal
    );
    println!(
        "Fecha: {} | Desde: {} | Hasta: {}",
        r.fecha, r.desde, r.hasta
    );
    println!(
        "Dias: {} | Dias mes desde: {} | Dias mes elegido: {}",
        r.dias_total_str(),
        r.dias_mes_desde_str(),
        r.dias_mes_elegido_str()
    );
    println!(
        "Tipo: {} | Gravedad: {} | Siniestro: {} | CIE10: {}",
        r.tipo_accidente, r.tipo_denuncia, r.nro_siniestro, r.cie10
    );
    println!(
        "Observacion: {} | Descripcion: {} | Prestador: {} | Envio: {}",
        r.observacion, r.descripcion, r.prestador, r.envio_denuncia
    );
    println!(
        "Creado: {} {} | Actualizado: {} {}",
        r.audit.created_at, r.audit.created_by, r.audit.updated_at, r.audit.updated_by
    );
}

fn print_facets(working: &RecordStore) {
    let facets = working.facets();

    println!("Provincias: {}", facets.provincias.join(", "));
    println!("Areas: {}", facets.areas.join(", "));
    println!("Observaciones: {}", facets.observaciones.join(", "));
    println!("Personal: {}", facets.personal.join(", "));
    println!("Meses: {}", facets.meses.join(", "));
    println!(
        "Dias totales: {}",
        facets
            .dias_totales
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
}
