//! Generic in-memory stand-in for the hosted section tables.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::ordering::domain::OrderIndex;
use crate::ordering::ports::{OrderIndexStore, OrderWriteError, OrderWriteResult};
use crate::project::{
    domain::{OrderedSectionRow, ProjectId, SectionRecordId, SectionRow},
    ports::{SectionStore, SectionStoreError, SectionStoreResult},
};

/// Thread-safe in-memory store for one section table.
///
/// Rows live in insertion order, mirroring the hosted store's insertion-time
/// bookkeeping: the creation-time sort used by the list operation is stable,
/// so equal timestamps resolve to insertion order.
#[derive(Debug, Clone)]
pub struct InMemorySectionStore<R> {
    rows: Arc<RwLock<Vec<R>>>,
}

impl<R> InMemorySectionStore<R> {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<R> Default for InMemorySectionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(err: impl std::fmt::Display) -> SectionStoreError {
    SectionStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<R> SectionStore<R> for InMemorySectionStore<R>
where
    R: SectionRow,
{
    async fn insert(&self, row: &R) -> SectionStoreResult<()> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        if rows.iter().any(|existing| existing.id() == row.id()) {
            return Err(SectionStoreError::DuplicateRecord(row.id()));
        }
        rows.push(row.clone());
        Ok(())
    }

    async fn update(&self, row: &R) -> SectionStoreResult<()> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        let slot = rows
            .iter_mut()
            .find(|existing| existing.id() == row.id())
            .ok_or(SectionStoreError::RecordNotFound(row.id()))?;
        *slot = row.clone();
        Ok(())
    }

    async fn upsert(&self, row: &R) -> SectionStoreResult<()> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        match rows.iter_mut().find(|existing| existing.id() == row.id()) {
            Some(slot) => *slot = row.clone(),
            None => rows.push(row.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: SectionRecordId) -> SectionStoreResult<()> {
        let mut rows = self.rows.write().map_err(lock_error)?;
        let before = rows.len();
        rows.retain(|existing| existing.id() != id);
        if rows.len() == before {
            return Err(SectionStoreError::RecordNotFound(id));
        }
        Ok(())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> SectionStoreResult<Vec<R>> {
        let rows = self.rows.read().map_err(lock_error)?;
        let mut matching: Vec<R> = rows
            .iter()
            .filter(|existing| existing.project_id() == project_id)
            .cloned()
            .collect();
        matching.sort_by_key(SectionRow::created_at);
        Ok(matching)
    }
}

#[async_trait]
impl<R> OrderIndexStore<SectionRecordId> for InMemorySectionStore<R>
where
    R: OrderedSectionRow,
{
    async fn write_order_index(
        &self,
        id: SectionRecordId,
        index: OrderIndex,
    ) -> OrderWriteResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|err| OrderWriteError::persistence(std::io::Error::other(err.to_string())))?;
        let slot = rows
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| {
                OrderWriteError::persistence(std::io::Error::other(format!(
                    "record not found: {id}"
                )))
            })?;
        slot.set_order_index(index);
        Ok(())
    }
}
