//! Store: immutable, in-memory collection of [`TrialRecord`] values.
//!
//! The store is built once at start-up and never mutated afterwards. Search
//! requests borrow it concurrently; each request keeps its own transient
//! index sets.

use crate::error::{CoreError, Result};
use crate::types::TrialRecord;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<TrialRecord>,
    by_id: HashMap<String, usize>,
}

impl RecordStore {
    /// Build a store, keeping the given order as store order.
    ///
    /// Fails with [`CoreError::DuplicateId`] if two records share an id.
    pub fn new(records: Vec<TrialRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), idx).is_some() {
                return Err(CoreError::DuplicateId(record.id.clone()));
            }
        }
        tracing::debug!(records = records.len(), "record store built");
        Ok(Self { records, by_id })
    }

    /// Every record, in store order.
    pub fn all(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Records satisfying `pred`, in store order.
    pub fn records_where<P>(&self, mut pred: P) -> Vec<&TrialRecord>
    where
        P: FnMut(&TrialRecord) -> bool,
    {
        self.records.iter().filter(|r| pred(r)).collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&TrialRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn by_index(&self, idx: usize) -> Option<&TrialRecord> {
        self.records.get(idx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
