//! The document store the record history lives in.
//!
//! The trait mirrors the remote provider's surface: an ordered listing,
//! per-document create/update/delete, and an atomic `commit_batch` whose
//! operation count is capped per call. `SqliteStore` implements the same
//! contract against a local database file.

pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::record::IncidentRecord;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait DocumentStore {
    /// All documents, ordered by creation time (newest first by default).
    async fn list_all(&self, newest_first: bool) -> AppResult<Vec<IncidentRecord>>;

    /// Store a new document; returns the assigned id.
    async fn create(&self, record: &IncidentRecord, user: &str) -> AppResult<String>;

    async fn update(&self, id: &str, record: &IncidentRecord, user: &str) -> AppResult<()>;

    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Atomically delete a batch of documents. Fails without touching
    /// anything when the batch exceeds [`max_batch_ops`](Self::max_batch_ops).
    async fn commit_batch(&self, ids: &[String]) -> AppResult<()>;

    /// Provider-imposed hard cap on operations per `commit_batch` call.
    fn max_batch_ops(&self) -> usize;
}
