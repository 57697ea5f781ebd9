pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod roster;
pub mod update;

use crate::config::Config;
use crate::core::accountant::MonthSelection;
use crate::errors::{AppError, AppResult};
use crate::roster::{RosterIndex, SnapshotCache};
use crate::store::SqliteStore;
use crate::ui::messages::warning;
use crate::utils::date::MonthKey;
use std::io::{self, Write};

pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database, &cfg.collection, cfg.batch_hard_limit)
}

pub(crate) fn snapshot_cache(cfg: &Config) -> SnapshotCache {
    SnapshotCache::new(cfg.roster_cache.clone())
}

/// Build the roster index from the cached snapshot. `Ok(None)` when nothing
/// is cached; cache failures bubble up as `AppError::Cache` so the caller
/// can degrade to manual entry.
pub(crate) fn load_roster_index(cfg: &Config) -> AppResult<Option<RosterIndex>> {
    match snapshot_cache(cfg).restore()? {
        Some(snapshot) => Ok(Some(RosterIndex::build(&snapshot.rows))),
        None => Ok(None),
    }
}

/// Parse an explicitly supplied month key; an invalid value is a user error,
/// not a silent no-reference-month.
fn parse_month_flag(flag: &Option<String>) -> AppResult<Option<MonthKey>> {
    match flag {
        None => Ok(None),
        Some(raw) => MonthKey::parse(raw)
            .map(Some)
            .ok_or_else(|| AppError::InvalidMonthKey(raw.clone())),
    }
}

/// Assemble the reference-month candidates: the command's explicit month,
/// the configured chosen month, and (for history views) the active month
/// facet. A malformed configured month is ignored with a warning rather
/// than blocking the command.
pub(crate) fn month_selection(
    calc: &Option<String>,
    history_filter: &Option<String>,
    cfg: &Config,
) -> AppResult<MonthSelection> {
    let chosen = match &cfg.chosen_month {
        Some(raw) => {
            let parsed = MonthKey::parse(raw);
            if parsed.is_none() {
                warning(format!("Ignoring malformed chosen_month in config: {raw}"));
            }
            parsed
        }
        None => None,
    };

    Ok(MonthSelection {
        calc: parse_month_flag(calc)?,
        chosen,
        history_filter: history_filter.as_deref().and_then(MonthKey::parse),
    })
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
