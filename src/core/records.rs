//! The in-memory working set of records for one command invocation.
//!
//! Loaded from the document store at command start and owned exclusively by
//! the session; the store remains the source of truth across sessions.

use crate::core::accountant;
use crate::core::filter::{self, Facets, FilterCriteria};
use crate::errors::AppResult;
use crate::models::record::IncidentRecord;
use crate::store::DocumentStore;
use crate::utils::date::MonthKey;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<IncidentRecord>,
}

impl RecordStore {
    pub async fn load(store: &dyn DocumentStore) -> AppResult<Self> {
        Ok(Self {
            records: store.list_all(true).await?,
        })
    }

    pub fn from_records(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&IncidentRecord> {
        self.records.iter().find(|r| r.id.as_deref() == Some(id))
    }

    pub fn remove_ids(&mut self, ids: &HashSet<String>) {
        self.records
            .retain(|r| !r.id.as_ref().is_some_and(|id| ids.contains(id)));
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<IncidentRecord> {
        filter::apply_filters(&self.records, criteria)
    }

    pub fn facets(&self) -> Facets {
        filter::derive_facets(&self.records)
    }

    /// Fill missing day counts in memory before presenting or exporting.
    /// Stored values are never replaced and nothing is written back.
    pub fn backfill_day_counts(&mut self, reference: Option<MonthKey>) -> usize {
        let mut changed = 0;
        for record in self.records.iter_mut() {
            if accountant::reconcile_record(record, reference, false) {
                changed += 1;
            }
        }
        changed
    }
}
