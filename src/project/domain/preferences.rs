//! Per-viewer expand/collapse preferences for project sections.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{ProjectId, Section};
use crate::auth::domain::ViewerIdentity;

/// Whether one viewer keeps one project section expanded.
///
/// Persisted via upsert on the (project, section, viewer) key, so writing a
/// preference always replaces whatever that viewer stored before. Anonymous
/// viewers on a shared link key their rows by browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPreference {
    project_id: ProjectId,
    section: Section,
    viewer: ViewerIdentity,
    expanded: bool,
    updated_at: DateTime<Utc>,
}

impl SectionPreference {
    /// Creates a preference row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        section: Section,
        viewer: ViewerIdentity,
        expanded: bool,
        clock: &impl Clock,
    ) -> Self {
        Self {
            project_id,
            section,
            viewer,
            expanded,
            updated_at: clock.utc(),
        }
    }

    /// Returns the project the preference applies to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the section the preference applies to.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Returns the viewer the preference belongs to.
    #[must_use]
    pub const fn viewer(&self) -> ViewerIdentity {
        self.viewer
    }

    /// Returns whether the section is expanded.
    #[must_use]
    pub const fn expanded(&self) -> bool {
        self.expanded
    }

    /// Returns when the preference was last written.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
