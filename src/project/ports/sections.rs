//! Generic store port for project section tables.

use crate::project::domain::{ProjectId, SectionRecordId, SectionRow};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for section store operations.
pub type SectionStoreResult<T> = Result<T, SectionStoreError>;

/// Per-table persistence contract for project section rows.
///
/// The hosted store exposes the same row-level surface for every section
/// table, so one generic port covers all of them; each row type gets its own
/// implementation instance.
#[async_trait]
pub trait SectionStore<R>: Send + Sync
where
    R: SectionRow,
{
    /// Stores a new row.
    ///
    /// # Errors
    ///
    /// Returns [`SectionStoreError::DuplicateRecord`] when the row ID
    /// already exists.
    async fn insert(&self, row: &R) -> SectionStoreResult<()>;

    /// Persists changes to an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`SectionStoreError::RecordNotFound`] when the row does not
    /// exist.
    async fn update(&self, row: &R) -> SectionStoreResult<()>;

    /// Stores the row, replacing any existing row with the same identifier.
    async fn upsert(&self, row: &R) -> SectionStoreResult<()>;

    /// Deletes a row.
    ///
    /// # Errors
    ///
    /// Returns [`SectionStoreError::RecordNotFound`] when the row does not
    /// exist.
    async fn delete(&self, id: SectionRecordId) -> SectionStoreResult<()>;

    /// Returns the project's rows sorted ascending by creation time.
    async fn list_by_project(&self, project_id: ProjectId) -> SectionStoreResult<Vec<R>>;
}

/// Errors returned by section store implementations.
#[derive(Debug, Clone, Error)]
pub enum SectionStoreError {
    /// A row with the same identifier already exists.
    #[error("duplicate record identifier: {0}")]
    DuplicateRecord(SectionRecordId),

    /// The row was not found.
    #[error("record not found: {0}")]
    RecordNotFound(SectionRecordId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SectionStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
