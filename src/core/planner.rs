//! Batched bulk-delete planning and execution.
//!
//! The store caps how many operations fit in one atomic batch, so an
//! arbitrary id list is partitioned into order-preserving chunks below that
//! cap. Commits for all batches are fired in program order and awaited
//! together: one failing batch neither blocks nor rolls back the others, so
//! after a partial failure the store must be re-read as the source of truth.

use crate::store::DocumentStore;
use futures::future;

/// Partition `ids` into batches of at most `max_per_batch`, preserving input
/// order within and across batches. Every id appears exactly once; no batch
/// is empty.
pub fn plan(ids: &[String], max_per_batch: usize) -> Vec<Vec<String>> {
    let size = max_per_batch.max(1);
    ids.chunks(size).map(|chunk| chunk.to_vec()).collect()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BulkDeleteReport {
    /// Ids handed to the store across all batches.
    pub attempted: usize,
    /// Ids in batches whose commit succeeded.
    pub deleted: usize,
    pub failed_batches: usize,
    pub errors: Vec<String>,
}

impl BulkDeleteReport {
    /// Some batches failed: an unknown subset of `attempted` is gone and the
    /// caller must re-query the store.
    pub fn is_partial(&self) -> bool {
        self.failed_batches > 0
    }
}

/// Commit every planned batch. All commits are issued before any is awaited,
/// so several may be in flight at once; each operates on a disjoint id list.
/// In-flight commits cannot be cancelled.
pub async fn execute(store: &dyn DocumentStore, batches: &[Vec<String>]) -> BulkDeleteReport {
    let commits = batches.iter().map(|batch| store.commit_batch(batch));
    let results = future::join_all(commits).await;

    let mut report = BulkDeleteReport {
        attempted: batches.iter().map(Vec::len).sum(),
        ..Default::default()
    };

    for (batch, result) in batches.iter().zip(results) {
        match result {
            Ok(()) => report.deleted += batch.len(),
            Err(e) => {
                report.failed_batches += 1;
                report.errors.push(e.to_string());
            }
        }
    }

    report
}
