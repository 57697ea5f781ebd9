//! SQLite-backed document store.
//!
//! Each record is one row: a UUID id, the record payload as JSON, and the
//! audit columns the store itself owns and stamps on every write.

use crate::errors::{AppError, AppResult};
use crate::models::record::{Audit, IncidentRecord};
use crate::store::DocumentStore;
use async_trait::async_trait;
use chrono::Local;
use log::debug;
use rusqlite::{Connection, Row, params};
use std::path::Path;
use uuid::Uuid;

pub struct SqliteStore {
    conn: Connection,
    collection: String,
    hard_limit: usize,
}

impl SqliteStore {
    pub fn open(path: &str, collection: &str, hard_limit: usize) -> AppResult<Self> {
        if collection.is_empty()
            || !collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::Config(format!(
                "invalid collection name: {collection}"
            )));
        }

        let conn = Connection::open(Path::new(path))?;
        let store = Self {
            conn,
            collection: collection.to_string(),
            hard_limit,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> AppResult<()> {
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id         TEXT PRIMARY KEY,
                payload    TEXT NOT NULL,
                created_at TEXT NOT NULL,
                created_by TEXT NOT NULL DEFAULT '',
                updated_at TEXT NOT NULL,
                updated_by TEXT NOT NULL DEFAULT ''
            );",
            self.collection
        ))?;
        Ok(())
    }

    fn map_row(row: &Row) -> rusqlite::Result<IncidentRecord> {
        let id: String = row.get("id")?;
        let payload: String = row.get("payload")?;

        let mut record: IncidentRecord = serde_json::from_str(&payload).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

        record.id = Some(id);
        record.audit = Audit {
            created_by: row.get("created_by")?,
            created_at: row.get("created_at")?,
            updated_by: row.get("updated_by")?,
            updated_at: row.get("updated_at")?,
        };
        Ok(record)
    }

    fn payload(record: &IncidentRecord) -> AppResult<String> {
        serde_json::to_string(record).map_err(|e| AppError::Store(e.to_string()))
    }
}

#[async_trait(?Send)]
impl DocumentStore for SqliteStore {
    async fn list_all(&self, newest_first: bool) -> AppResult<Vec<IncidentRecord>> {
        let order = if newest_first { "DESC" } else { "ASC" };
        let sql = format!(
            "SELECT id, payload, created_at, created_by, updated_at, updated_by
             FROM {}
             ORDER BY created_at {order}, rowid {order}",
            self.collection
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    async fn create(&self, record: &IncidentRecord, user: &str) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let payload = Self::payload(record)?;
        let now = Local::now().to_rfc3339();

        self.conn.execute(
            &format!(
                "INSERT INTO {} (id, payload, created_at, created_by, updated_at, updated_by)
                 VALUES (?1, ?2, ?3, ?4, ?3, ?4)",
                self.collection
            ),
            params![id, payload, now, user],
        )?;

        debug!("created document {id} in {}", self.collection);
        Ok(id)
    }

    async fn update(&self, id: &str, record: &IncidentRecord, user: &str) -> AppResult<()> {
        let payload = Self::payload(record)?;
        let now = Local::now().to_rfc3339();

        let n = self.conn.execute(
            &format!(
                "UPDATE {} SET payload = ?1, updated_at = ?2, updated_by = ?3 WHERE id = ?4",
                self.collection
            ),
            params![payload, now, user, id],
        )?;

        if n == 0 {
            return Err(AppError::RecordNotFound(id.to_string()));
        }
        debug!("updated document {id}");
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let n = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", self.collection),
            params![id],
        )?;

        if n == 0 {
            return Err(AppError::RecordNotFound(id.to_string()));
        }
        debug!("deleted document {id}");
        Ok(())
    }

    async fn commit_batch(&self, ids: &[String]) -> AppResult<()> {
        if ids.len() > self.hard_limit {
            return Err(AppError::BatchTooLarge {
                got: ids.len(),
                limit: self.hard_limit,
            });
        }

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare(&format!("DELETE FROM {} WHERE id = ?1", self.collection))?;
            for id in ids {
                stmt.execute(params![id])?;
            }
        }
        tx.commit()?;

        debug!("committed delete batch of {} ids", ids.len());
        Ok(())
    }

    fn max_batch_ops(&self) -> usize {
        self.hard_limit
    }
}
