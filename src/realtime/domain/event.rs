//! Row-level change events pushed by the hosted store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::domain::{ProjectId, Section};

/// What happened to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The row was inserted.
    Inserted,
    /// The row was updated.
    Updated,
    /// The row was deleted.
    Deleted,
}

/// One row-level change within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// The project the changed row belongs to.
    pub project_id: ProjectId,
    /// The section table the row lives in.
    pub section: Section,
    /// The changed row's identifier, opaque to the consumer.
    pub row_id: Uuid,
    /// What happened to the row.
    pub kind: ChangeKind,
}

impl ChangeEvent {
    /// Creates a change event.
    #[must_use]
    pub const fn new(project_id: ProjectId, section: Section, row_id: Uuid, kind: ChangeKind) -> Self {
        Self {
            project_id,
            section,
            row_id,
            kind,
        }
    }
}
