//! Service layer for task creation, editing, and hierarchy loading.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

use crate::ordering::domain::next_order_index;
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{
        NewTask, Subtask, SubtaskId, Task, TaskDomainError, TaskId, TaskNode, TaskNote, TaskStatus,
        build_forest,
    },
    ports::{
        SubtaskRepository, TaskNoteRepository, TaskRepository, TaskRepositoryError,
        TaskRepositoryResult,
    },
};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    parent_id: Option<TaskId>,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request for a root task with the required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            parent_id: None,
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Nests the new task under an existing task in the same project.
    #[must_use]
    pub const fn with_parent(mut self, parent_id: TaskId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for editing a task's user-visible fields.
///
/// Carries the full replacement values the edit form submits; omitted
/// optional fields clear the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
}

impl EditTaskRequest {
    /// Creates an edit with the replacement title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The requested parent task does not exist.
    #[error("parent task not found: {0}")]
    ParentNotFound(TaskId),

    /// The requested parent task belongs to a different project.
    #[error("parent task {parent} belongs to project {parent_project}, not {project}")]
    ParentOutsideProject {
        /// The requested parent task.
        parent: TaskId,
        /// The project the parent actually belongs to.
        parent_project: ProjectId,
        /// The project the new task was created in.
        project: ProjectId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskService<R, S, N, C>
where
    R: TaskRepository,
    S: SubtaskRepository,
    N: TaskNoteRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    subtasks: Arc<S>,
    notes: Arc<N>,
    clock: Arc<C>,
}

impl<R, S, N, C> TaskService<R, S, N, C>
where
    R: TaskRepository,
    S: SubtaskRepository,
    N: TaskNoteRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, subtasks: Arc<S>, notes: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            subtasks,
            notes,
            clock,
        }
    }

    /// Creates a task appended to the end of its sibling group.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the title is blank, the parent is
    /// missing or belongs to another project, or persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        self.validate_parent(request.project_id, request.parent_id)
            .await?;

        let siblings = self.tasks.list_by_project(request.project_id).await?;
        let order_index = next_order_index(
            siblings
                .iter()
                .filter(|task| task.parent_id() == request.parent_id)
                .map(Task::order_index),
        );

        let task = Task::create(
            NewTask {
                project_id: request.project_id,
                parent_id: request.parent_id,
                title: request.title,
                description: request.description,
                due_date: request.due_date,
                order_index,
            },
            &*self.clock,
        )?;
        self.tasks.insert(&task).await?;
        Ok(task)
    }

    /// Replaces a task's title, description, and due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is missing, the new
    /// title is blank, or persistence fails.
    pub async fn edit(&self, id: TaskId, request: EditTaskRequest) -> TaskLifecycleResult<Task> {
        let mut task = self.fetch_task(id).await?;
        task.set_title(request.title, &*self.clock)?;
        task.set_description(request.description, &*self.clock);
        task.set_due_date(request.due_date, &*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Moves a task to a new progress state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is missing or
    /// persistence fails.
    pub async fn change_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.fetch_task(id).await?;
        task.set_status(status, &*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task together with its subtasks and notes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is missing or
    /// persistence fails. Child rows removed before a failure stay removed.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.subtasks.delete_subtasks_of(id).await?;
        self.notes.delete_notes_of(id).await?;
        self.tasks.delete(id).await?;
        tracing::debug!("Deleted task and child rows: {}", id);
        Ok(())
    }

    /// Loads the project's tasks as a forest in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the load fails.
    pub async fn load_tree(&self, project_id: ProjectId) -> TaskLifecycleResult<Vec<TaskNode>> {
        let tasks = self.tasks.list_by_project(project_id).await?;
        Ok(build_forest(tasks))
    }

    /// Adds a subtask under an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is missing, the title is
    /// blank, or persistence fails.
    pub async fn add_subtask(
        &self,
        task_id: TaskId,
        title: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Subtask> {
        self.fetch_task(task_id).await?;
        let subtask = Subtask::create(task_id, title, &*self.clock)?;
        self.subtasks.insert_subtask(&subtask).await?;
        Ok(subtask)
    }

    /// Sets a subtask's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the subtask is missing or
    /// persistence fails.
    pub async fn set_subtask_completed(
        &self,
        id: SubtaskId,
        completed: bool,
    ) -> TaskLifecycleResult<Subtask> {
        let mut subtask = self
            .subtasks
            .find_subtask(id)
            .await?
            .ok_or(TaskRepositoryError::SubtaskNotFound(id))?;
        subtask.set_completed(completed, &*self.clock);
        self.subtasks.update_subtask(&subtask).await?;
        Ok(subtask)
    }

    /// Adds a note under an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is missing, the content
    /// is blank, or persistence fails.
    pub async fn add_note(
        &self,
        task_id: TaskId,
        content: impl Into<String> + Send,
    ) -> TaskLifecycleResult<TaskNote> {
        self.fetch_task(task_id).await?;
        let note = TaskNote::create(task_id, content, &*self.clock)?;
        self.notes.insert_note(&note).await?;
        Ok(note)
    }

    /// Returns a task's subtasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the load fails.
    pub async fn subtasks_of(&self, task_id: TaskId) -> TaskLifecycleResult<Vec<Subtask>> {
        let subtasks = self.subtasks.list_subtasks(task_id).await?;
        Ok(subtasks)
    }

    /// Returns a task's notes in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the load fails.
    pub async fn notes_of(&self, task_id: TaskId) -> TaskLifecycleResult<Vec<TaskNote>> {
        let notes = self.notes.list_notes(task_id).await?;
        Ok(notes)
    }

    async fn fetch_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let found: TaskRepositoryResult<Option<Task>> = self.tasks.find_by_id(id).await;
        found?
            .ok_or(TaskRepositoryError::TaskNotFound(id))
            .map_err(TaskLifecycleError::from)
    }

    async fn validate_parent(
        &self,
        project_id: ProjectId,
        parent_id: Option<TaskId>,
    ) -> TaskLifecycleResult<()> {
        let Some(parent) = parent_id else {
            return Ok(());
        };
        let parent_task = self
            .tasks
            .find_by_id(parent)
            .await?
            .ok_or(TaskLifecycleError::ParentNotFound(parent))?;
        if parent_task.project_id() != project_id {
            return Err(TaskLifecycleError::ParentOutsideProject {
                parent,
                parent_project: parent_task.project_id(),
                project: project_id,
            });
        }
        Ok(())
    }
}
