//! Repository ports for tasks and their child rows.

use crate::project::domain::ProjectId;
use crate::task::domain::{Subtask, SubtaskId, Task, TaskId, TaskNote, TaskNoteId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task persistence operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task row. Child subtasks and notes are untouched; cascading
    /// is the service layer's decision.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks in the project, sorted ascending by order index
    /// with creation-time tie-break.
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;
}

/// Subtask persistence contract.
#[async_trait]
pub trait SubtaskRepository: Send + Sync {
    /// Stores a new subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateSubtask`] when the subtask ID
    /// already exists.
    async fn insert_subtask(&self, subtask: &Subtask) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::SubtaskNotFound`] when the subtask
    /// does not exist.
    async fn update_subtask(&self, subtask: &Subtask) -> TaskRepositoryResult<()>;

    /// Finds a subtask by identifier.
    ///
    /// Returns `None` when the subtask does not exist.
    async fn find_subtask(&self, id: SubtaskId) -> TaskRepositoryResult<Option<Subtask>>;

    /// Returns the task's subtasks sorted ascending by creation time.
    async fn list_subtasks(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<Subtask>>;

    /// Deletes every subtask belonging to the task. Deleting for a task with
    /// no subtasks is a no-op.
    async fn delete_subtasks_of(&self, task_id: TaskId) -> TaskRepositoryResult<()>;
}

/// Task note persistence contract.
#[async_trait]
pub trait TaskNoteRepository: Send + Sync {
    /// Stores a new note.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateNote`] when the note ID
    /// already exists.
    async fn insert_note(&self, note: &TaskNote) -> TaskRepositoryResult<()>;

    /// Returns the task's notes sorted ascending by creation time.
    async fn list_notes(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskNote>>;

    /// Deletes every note belonging to the task. Deleting for a task with no
    /// notes is a no-op.
    async fn delete_notes_of(&self, task_id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A subtask with the same identifier already exists.
    #[error("duplicate subtask identifier: {0}")]
    DuplicateSubtask(SubtaskId),

    /// A note with the same identifier already exists.
    #[error("duplicate note identifier: {0}")]
    DuplicateNote(TaskNoteId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The subtask was not found.
    #[error("subtask not found: {0}")]
    SubtaskNotFound(SubtaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
