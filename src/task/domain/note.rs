//! Free-form note rows attached to a task.

use super::{TaskDomainError, TaskId, TaskNoteId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A free-form note belonging to one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNote {
    id: TaskNoteId,
    task_id: TaskId,
    content: String,
    created_at: DateTime<Utc>,
}

impl TaskNote {
    /// Creates a note under the given task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyNoteContent`] when the content is
    /// blank.
    pub fn create(
        task_id: TaskId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let raw = content.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyNoteContent);
        }
        Ok(Self {
            id: TaskNoteId::new(),
            task_id,
            content: trimmed.to_owned(),
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a note from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: TaskNoteId,
        task_id: TaskId,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            task_id,
            content,
            created_at,
        }
    }

    /// Returns the note identifier.
    #[must_use]
    pub const fn id(&self) -> TaskNoteId {
        self.id
    }

    /// Returns the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the note content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
