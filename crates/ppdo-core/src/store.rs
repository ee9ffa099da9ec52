//! In-memory record store.
//!
//! An ordered collection that keeps ids unique across every mutation.
//! Views read it as a slice and feed it to the list pipeline.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::models::{Concern, ConcernStatus};
use crate::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Build a store, rejecting duplicate ids.
    pub fn new(records: Vec<R>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id()) {
                return Err(CoreError::DuplicateId(r.id().to_string()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: &str) -> CoreResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    /// Append a record at the end.
    pub fn insert(&mut self, record: R) -> CoreResult<()> {
        if self.get(record.id()).is_some() {
            return Err(CoreError::DuplicateId(record.id().to_string()));
        }
        debug!(id = record.id(), "insert record");
        self.records.push(record);
        Ok(())
    }

    /// Delete by id, preserving the order of the remaining records.
    pub fn remove(&mut self, id: &str) -> CoreResult<R> {
        let idx = self.position(id)?;
        debug!(id, "remove record");
        Ok(self.records.remove(idx))
    }

    /// Replace the record carrying the same id, in place. Returns the old one.
    pub fn replace(&mut self, record: R) -> CoreResult<R> {
        let idx = self.position(record.id())?;
        debug!(id = record.id(), "replace record");
        Ok(std::mem::replace(&mut self.records[idx], record))
    }
}

impl RecordStore<Concern> {
    pub fn update_status(&mut self, id: &str, status: ConcernStatus) -> CoreResult<()> {
        let mut concern = self.get(id).cloned().ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        concern.status = status;
        self.replace(concern)?;
        Ok(())
    }

    pub fn update_notes(&mut self, id: &str, notes: &str) -> CoreResult<()> {
        let mut concern = self.get(id).cloned().ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        concern.notes = notes.to_string();
        self.replace(concern)?;
        Ok(())
    }
}
