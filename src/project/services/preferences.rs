//! Service layer for per-viewer section preferences.

use std::sync::Arc;

use mockable::Clock;

use crate::auth::domain::ViewerIdentity;
use crate::project::{
    domain::{ProjectId, Section, SectionPreference},
    ports::{PreferenceStore, PreferenceStoreResult},
};

/// Stores and loads section expand/collapse preferences.
///
/// The viewer identity arrives as an explicit argument on every call: it is
/// resolved once per UI session by [`crate::auth::services::ViewerResolver`]
/// and threaded through, so anonymous visitors on a shared link get stable
/// per-session preferences without any ambient state.
#[derive(Clone)]
pub struct PreferenceService<P, C>
where
    P: PreferenceStore,
    C: Clock + Send + Sync,
{
    preferences: Arc<P>,
    clock: Arc<C>,
}

impl<P, C> PreferenceService<P, C>
where
    P: PreferenceStore,
    C: Clock + Send + Sync,
{
    /// Creates a new preference service.
    #[must_use]
    pub const fn new(preferences: Arc<P>, clock: Arc<C>) -> Self {
        Self { preferences, clock }
    }

    /// Records whether the viewer keeps the section expanded.
    ///
    /// # Errors
    ///
    /// Returns the store error when the upsert fails.
    pub async fn set_section_expanded(
        &self,
        project_id: ProjectId,
        section: Section,
        viewer: ViewerIdentity,
        expanded: bool,
    ) -> PreferenceStoreResult<SectionPreference> {
        let preference =
            SectionPreference::new(project_id, section, viewer, expanded, &*self.clock);
        self.preferences.upsert(&preference).await?;
        Ok(preference)
    }

    /// Returns every preference the viewer stored for the project.
    ///
    /// # Errors
    ///
    /// Returns the store error when the load fails.
    pub async fn section_preferences(
        &self,
        project_id: ProjectId,
        viewer: ViewerIdentity,
    ) -> PreferenceStoreResult<Vec<SectionPreference>> {
        self.preferences.list_for_viewer(project_id, viewer).await
    }
}
