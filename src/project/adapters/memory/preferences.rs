//! In-memory stand-in for the hosted preference table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::ViewerIdentity;
use crate::project::{
    domain::{ProjectId, Section, SectionPreference},
    ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult},
};

type PreferenceKey = (ProjectId, Section, ViewerIdentity);

/// Thread-safe in-memory preference store keyed by the upsert conflict key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    state: Arc<RwLock<HashMap<PreferenceKey, SectionPreference>>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> PreferenceStoreError {
    PreferenceStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn upsert(&self, preference: &SectionPreference) -> PreferenceStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let key = (
            preference.project_id(),
            preference.section(),
            preference.viewer(),
        );
        state.insert(key, preference.clone());
        Ok(())
    }

    async fn list_for_viewer(
        &self,
        project_id: ProjectId,
        viewer: ViewerIdentity,
    ) -> PreferenceStoreResult<Vec<SectionPreference>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut rows: Vec<SectionPreference> = state
            .values()
            .filter(|row| row.project_id() == project_id && row.viewer() == viewer)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.section().as_str());
        Ok(rows)
    }
}
