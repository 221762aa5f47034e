//! In-memory stand-in for the hosted task tables.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::ordering::domain::{OrderIndex, display_order};
use crate::ordering::ports::{OrderIndexStore, OrderWriteError, OrderWriteResult};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Subtask, SubtaskId, Task, TaskId, TaskNote},
    ports::{
        SubtaskRepository, TaskNoteRepository, TaskRepository, TaskRepositoryError,
        TaskRepositoryResult,
    },
};

/// Thread-safe in-memory task, subtask, and note store.
///
/// Rows live in insertion order, which mirrors the hosted store's
/// insertion-time bookkeeping: creation-time ties resolve to insertion
/// order under the stable sorts used by the list operations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<TaskStoreState>>,
}

#[derive(Debug, Default)]
struct TaskStoreState {
    tasks: Vec<Task>,
    subtasks: Vec<Subtask>,
    notes: Vec<TaskNote>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.iter().any(|row| row.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|row| row.id() == task.id())
            .ok_or(TaskRepositoryError::TaskNotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let before = state.tasks.len();
        state.tasks.retain(|row| row.id() != id);
        if state.tasks.len() == before {
            return Err(TaskRepositoryError::TaskNotFound(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.iter().find(|row| row.id() == id).cloned())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut rows: Vec<Task> = state
            .tasks
            .iter()
            .filter(|row| row.project_id() == project_id)
            .cloned()
            .collect();
        display_order(&mut rows);
        Ok(rows)
    }
}

#[async_trait]
impl SubtaskRepository for InMemoryTaskStore {
    async fn insert_subtask(&self, subtask: &Subtask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.subtasks.iter().any(|row| row.id() == subtask.id()) {
            return Err(TaskRepositoryError::DuplicateSubtask(subtask.id()));
        }
        state.subtasks.push(subtask.clone());
        Ok(())
    }

    async fn update_subtask(&self, subtask: &Subtask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .subtasks
            .iter_mut()
            .find(|row| row.id() == subtask.id())
            .ok_or(TaskRepositoryError::SubtaskNotFound(subtask.id()))?;
        *slot = subtask.clone();
        Ok(())
    }

    async fn find_subtask(&self, id: SubtaskId) -> TaskRepositoryResult<Option<Subtask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.subtasks.iter().find(|row| row.id() == id).cloned())
    }

    async fn list_subtasks(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<Subtask>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut rows: Vec<Subtask> = state
            .subtasks
            .iter()
            .filter(|row| row.task_id() == task_id)
            .cloned()
            .collect();
        rows.sort_by_key(Subtask::created_at);
        Ok(rows)
    }

    async fn delete_subtasks_of(&self, task_id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.subtasks.retain(|row| row.task_id() != task_id);
        Ok(())
    }
}

#[async_trait]
impl TaskNoteRepository for InMemoryTaskStore {
    async fn insert_note(&self, note: &TaskNote) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.notes.iter().any(|row| row.id() == note.id()) {
            return Err(TaskRepositoryError::DuplicateNote(note.id()));
        }
        state.notes.push(note.clone());
        Ok(())
    }

    async fn list_notes(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskNote>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut rows: Vec<TaskNote> = state
            .notes
            .iter()
            .filter(|row| row.task_id() == task_id)
            .cloned()
            .collect();
        rows.sort_by_key(TaskNote::created_at);
        Ok(rows)
    }

    async fn delete_notes_of(&self, task_id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.notes.retain(|row| row.task_id() != task_id);
        Ok(())
    }
}

#[async_trait]
impl OrderIndexStore<TaskId> for InMemoryTaskStore {
    async fn write_order_index(&self, id: TaskId, index: OrderIndex) -> OrderWriteResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| OrderWriteError::persistence(std::io::Error::other(err.to_string())))?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| OrderWriteError::persistence(TaskRepositoryError::TaskNotFound(id)))?;
        slot.set_order_index(index);
        Ok(())
    }
}
