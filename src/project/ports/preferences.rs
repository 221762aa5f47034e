//! Upsert port for per-viewer section preferences.

use crate::auth::domain::ViewerIdentity;
use crate::project::domain::{ProjectId, SectionPreference};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for preference store operations.
pub type PreferenceStoreResult<T> = Result<T, PreferenceStoreError>;

/// Persistence contract for section expand/collapse preferences.
///
/// The conflict key is (project, section, viewer): writing a preference
/// replaces whatever that viewer stored for that section before.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Stores the preference, replacing any existing row under the same
    /// (project, section, viewer) key.
    async fn upsert(&self, preference: &SectionPreference) -> PreferenceStoreResult<()>;

    /// Returns every preference the viewer stored for the project.
    async fn list_for_viewer(
        &self,
        project_id: ProjectId,
        viewer: ViewerIdentity,
    ) -> PreferenceStoreResult<Vec<SectionPreference>>;
}

/// Errors returned by preference store implementations.
#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferenceStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
