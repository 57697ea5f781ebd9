//! Roster ("dotación") data: imported personnel rows and the cached snapshot.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One imported roster row, keyed by column header. Missing cells are
/// empty strings, so downstream code never distinguishes absent from blank.
pub type RosterRow = BTreeMap<String, String>;

/// One imported roster dataset plus its capture metadata. This is the unit
/// persisted to (and restored from) the single-slot local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub saved_at: String,
    #[serde(default)]
    pub version: Option<String>,
    pub rows: Vec<RosterRow>,
}

impl RosterSnapshot {
    pub fn new(rows: Vec<RosterRow>, version: Option<String>) -> Self {
        Self {
            saved_at: Local::now().to_rfc3339(),
            version,
            rows,
        }
    }
}
