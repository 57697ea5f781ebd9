//! Durable single-slot cache for the roster snapshot.
//!
//! The cache database is opened per operation and released when the
//! operation ends, commit or abort. A missing snapshot is a normal `None`;
//! any storage failure maps to `AppError::Cache` and the caller degrades to
//! "re-import required".

use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterSnapshot;
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::PathBuf;

const CACHE_KEY: &str = "roster_snapshot_v1";

pub struct SnapshotCache {
    path: PathBuf,
}

impl SnapshotCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> AppResult<Connection> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| AppError::Cache(e.to_string()))?;
        }

        let conn = Connection::open(&self.path).map_err(cache_err)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS roster_cache (
                key     TEXT PRIMARY KEY,
                payload TEXT NOT NULL
            )",
            [],
        )
        .map_err(cache_err)?;
        Ok(conn)
    }

    /// Store the snapshot, replacing whatever the slot held before.
    pub fn persist(&self, snapshot: &RosterSnapshot) -> AppResult<()> {
        let payload =
            serde_json::to_string(snapshot).map_err(|e| AppError::Cache(e.to_string()))?;

        let conn = self.open()?;
        let tx = conn.unchecked_transaction().map_err(cache_err)?;
        tx.execute(
            "INSERT OR REPLACE INTO roster_cache (key, payload) VALUES (?1, ?2)",
            params![CACHE_KEY, payload],
        )
        .map_err(cache_err)?;
        tx.commit().map_err(cache_err)?;

        debug!("roster snapshot cached ({} rows)", snapshot.rows.len());
        Ok(())
    }

    /// `Ok(None)` when the slot is empty; that is not an error.
    pub fn restore(&self) -> AppResult<Option<RosterSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let conn = self.open()?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM roster_cache WHERE key = ?1",
                params![CACHE_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(cache_err)?;

        match payload {
            None => Ok(None),
            Some(p) => serde_json::from_str(&p)
                .map(Some)
                .map_err(|e| AppError::Cache(format!("corrupt snapshot payload: {e}"))),
        }
    }

    /// Idempotent: clearing an empty slot succeeds.
    pub fn clear(&self) -> AppResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let conn = self.open()?;
        conn.execute(
            "DELETE FROM roster_cache WHERE key = ?1",
            params![CACHE_KEY],
        )
        .map_err(cache_err)?;

        debug!("roster snapshot cache cleared");
        Ok(())
    }
}

fn cache_err(e: rusqlite::Error) -> AppError {
    AppError::Cache(e.to_string())
}
