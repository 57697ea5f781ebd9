use crate::cli::commands::{month_selection, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accountant::resolve_reference_month;
use crate::core::records::RecordStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let mut working = RecordStore::load(&store).await?;

        // Exports see the same backfilled view as the history table.
        let selection = month_selection(&None, &filters.mes, cfg)?;
        let reference = resolve_reference_month(&selection, &cfg.features);
        working.backfill_day_counts(reference);

        let visible = working.filtered(&filters.to_criteria());

        ExportLogic::export(&visible, format.clone(), file, *force)?;
    }

    Ok(())
}
