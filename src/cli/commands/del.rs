use crate::cli::commands::{ask_confirmation, open_store};
use crate::cli::parser::{Commands, FilterArgs};
use crate::config::Config;
use crate::core::planner;
use crate::core::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::store::{DocumentStore, SqliteStore};
use crate::ui::messages::{error, info, success, warning};
use std::collections::HashSet;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        id,
        all,
        filters,
        yes,
    } = cmd
    {
        let store = open_store(cfg)?;

        if let Some(id) = id {
            return delete_one(&store, id, *yes).await;
        }

        if !*all {
            return Err(AppError::Other(
                "pass a record id, or --all for a bulk delete".to_string(),
            ));
        }

        delete_bulk(&store, cfg, filters, *yes).await?;
    }

    Ok(())
}

async fn delete_one(store: &SqliteStore, id: &str, yes: bool) -> AppResult<()> {
    if !yes
        && !ask_confirmation(&format!(
            "Delete record {id}? This action is irreversible."
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    store.delete(id).await?;
    success(format!("Record {id} deleted."));
    Ok(())
}

async fn delete_bulk(
    store: &SqliteStore,
    cfg: &Config,
    filters: &FilterArgs,
    yes: bool,
) -> AppResult<()> {
    let mut working = RecordStore::load(store).await?;

    if working.is_empty() {
        info("No records to delete.");
        return Ok(());
    }

    let criteria = filters.to_criteria();
    let filtered = working.filtered(&criteria);
    let narrowed = !criteria.is_empty() && filtered.len() != working.len();

    //
    // When filters narrow the view the user must choose explicitly between
    // the filtered subset and the entire history. Non-interactive runs take
    // the filtered subset, the conservative choice.
    //
    let targets = if narrowed {
        let take_filtered = yes
            || ask_confirmation(&format!(
                "Filters are active: delete ONLY the filtered subset ({} of {})? \
                 Answering no deletes EVERYTHING.",
                filtered.len(),
                working.len()
            ));
        if take_filtered {
            filtered
        } else {
            working.records().to_vec()
        }
    } else {
        working.records().to_vec()
    };

    let ids: Vec<String> = targets.iter().filter_map(|r| r.id.clone()).collect();
    if ids.is_empty() {
        info("No ids to delete.");
        return Ok(());
    }

    if !yes
        && !ask_confirmation(&format!(
            "Delete {} record(s)? This action is irreversible.",
            ids.len()
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    let batches = planner::plan(&ids, cfg.max_per_batch());
    info(format!(
        "Deleting {} record(s) in {} batch(es)...",
        ids.len(),
        batches.len()
    ));

    let report = planner::execute(store, &batches).await;

    if report.is_partial() {
        for e in &report.errors {
            error(e);
        }
        warning(format!(
            "Partial delete: {} of {} confirmed removed. Re-reading the store.",
            report.deleted, report.attempted
        ));

        // Some subset may be gone; the store is the source of truth now.
        let remaining = store.list_all(true).await?;
        info(format!("{} record(s) remain.", remaining.len()));
        return Ok(());
    }

    success(format!("Deleted {} record(s).", report.deleted));

    let gone: HashSet<String> = ids.into_iter().collect();
    working.remove_ids(&gone);
    info(format!("{} record(s) remain.", working.len()));

    Ok(())
}
