//! Whole-project duplication as an ordered sequence of copy steps.
//!
//! The destination project row is created first and is never rolled back;
//! after that, every dependent section copies independently and collects its
//! failures instead of aborting the run. The caller receives one
//! [`ReplicationReport`] naming the sections that came through incomplete.
//!
//! Rows are read in creation order and inserted one at a time, each insert
//! followed by a short fixed pause. Sections without an explicit order index
//! derive their display order from insertion-time bookkeeping in the hosted
//! store, and the pause biases that bookkeeping towards matching the source
//! order. It is a timing heuristic, not a guarantee.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;
use thiserror::Error;

use crate::auth::domain::UserId;
use crate::project::{
    domain::{
        DesignRequirement, Document, ImageAsset, Meeting, NewProject, Project,
        ProjectDomainError, ProjectId, ProjectNote, ReturnItem, Schedule, Section, SectionRow,
        TextRequirement, VideoRequirement,
    },
    ports::{ProjectRepository, ProjectRepositoryError, SectionStore},
};
use crate::task::{
    domain::{
        PersistedSubtaskData, PersistedTaskData, Subtask, SubtaskId, Task, TaskId, TaskNote,
        TaskNoteId,
    },
    ports::{SubtaskRepository, TaskNoteRepository, TaskRepository},
};

/// Pause issued after each dependent-row insert.
const DEFAULT_INSERT_PAUSE: Duration = Duration::from_millis(50);

/// One human-readable copy failure, attributed to its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFailure {
    /// The section the failure occurred in.
    pub section: Section,
    /// What went wrong, suitable for the completion notice.
    pub detail: String,
}

impl SectionFailure {
    fn new(section: Section, detail: String) -> Self {
        Self { section, detail }
    }
}

/// Outcome of a duplication run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationReport {
    project: Project,
    failures: Vec<SectionFailure>,
}

impl ReplicationReport {
    /// Returns the destination project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns every collected copy failure, in occurrence order.
    #[must_use]
    pub fn failures(&self) -> &[SectionFailure] {
        &self.failures
    }

    /// Returns whether every dependent row copied cleanly.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the distinct sections that came through incomplete, in
    /// first-failure order.
    #[must_use]
    pub fn incomplete_sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();
        for failure in &self.failures {
            if !sections.contains(&failure.section) {
                sections.push(failure.section);
            }
        }
        sections
    }
}

/// Errors that abort a duplication run outright.
///
/// Only failing to resolve the source or to create the destination project
/// aborts; every later failure is collected into the report instead.
#[derive(Debug, Error)]
pub enum ReplicationError {
    /// The source project does not exist.
    #[error("source project not found: {0}")]
    SourceNotFound(ProjectId),

    /// Destination project validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// Creating or resolving a project row failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// The section stores a duplication run copies through.
#[derive(Clone)]
pub struct SectionStores {
    /// Timeline schedule rows.
    pub schedules: Arc<dyn SectionStore<Schedule>>,
    /// Linked documents.
    pub documents: Arc<dyn SectionStore<Document>>,
    /// Meeting records.
    pub meetings: Arc<dyn SectionStore<Meeting>>,
    /// Backer return tiers.
    pub returns: Arc<dyn SectionStore<ReturnItem>>,
    /// Design requirements.
    pub design_requirements: Arc<dyn SectionStore<DesignRequirement>>,
    /// Text-content requirements.
    pub text_requirements: Arc<dyn SectionStore<TextRequirement>>,
    /// Video requirements.
    pub video_requirements: Arc<dyn SectionStore<VideoRequirement>>,
    /// Campaign image assets.
    pub image_assets: Arc<dyn SectionStore<ImageAsset>>,
    /// Free-form project notes.
    pub project_notes: Arc<dyn SectionStore<ProjectNote>>,
}

/// Deep-copies a project and every dependent section into a new project.
#[derive(Clone)]
pub struct ProjectReplicator<P, T, S, N, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    S: SubtaskRepository,
    N: TaskNoteRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    subtasks: Arc<S>,
    notes: Arc<N>,
    sections: SectionStores,
    clock: Arc<C>,
    insert_pause: Duration,
}

impl<P, T, S, N, C> ProjectReplicator<P, T, S, N, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    S: SubtaskRepository,
    N: TaskNoteRepository,
    C: Clock + Send + Sync,
{
    /// Creates a replicator over the given stores.
    #[must_use]
    pub fn new(
        projects: Arc<P>,
        tasks: Arc<T>,
        subtasks: Arc<S>,
        notes: Arc<N>,
        sections: SectionStores,
        clock: Arc<C>,
    ) -> Self {
        Self {
            projects,
            tasks,
            subtasks,
            notes,
            sections,
            clock,
            insert_pause: DEFAULT_INSERT_PAUSE,
        }
    }

    /// Overrides the pause issued after each dependent-row insert.
    ///
    /// Tests pass [`Duration::ZERO`] to run the copy steps back to back.
    #[must_use]
    pub const fn with_insert_pause(mut self, pause: Duration) -> Self {
        self.insert_pause = pause;
        self
    }

    /// Duplicates the source project and all its dependent sections for the
    /// given owner.
    ///
    /// The destination is named `"{source name} copy"` and starts unshared
    /// and in progress. Once its row is created it is never rolled back;
    /// dependent-section failures are collected into the returned report.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError`] when the source cannot be resolved or
    /// the destination project row cannot be created.
    pub async fn duplicate(
        &self,
        source_id: ProjectId,
        new_owner: UserId,
    ) -> Result<ReplicationReport, ReplicationError> {
        let source = self
            .projects
            .find_by_id(source_id)
            .await?
            .ok_or(ReplicationError::SourceNotFound(source_id))?;

        let destination = Project::create(
            NewProject {
                name: source.duplicate_name(),
                description: source.description().map(ToOwned::to_owned),
                brand: source.brand(),
                owner: new_owner,
            },
            &*self.clock,
        )?;
        self.projects.insert(&destination).await?;

        let mut failures = Vec::new();
        let copied_tasks = self
            .copy_tasks(source_id, destination.id(), &mut failures)
            .await;
        self.copy_task_children(&copied_tasks, &mut failures).await;
        self.copy_sections(source_id, destination.id(), new_owner, &mut failures)
            .await;

        if !failures.is_empty() {
            tracing::warn!(
                "Project {} duplicated with incomplete sections: {}",
                destination.id(),
                failures.len()
            );
        }
        Ok(ReplicationReport {
            project: destination,
            failures,
        })
    }

    /// Copies the source tasks, remapping parent references through a
    /// pre-generated id map. Returns the (source, destination) pairs that
    /// copied successfully.
    async fn copy_tasks(
        &self,
        source_id: ProjectId,
        destination_id: ProjectId,
        failures: &mut Vec<SectionFailure>,
    ) -> Vec<(TaskId, TaskId)> {
        let mut rows = match self.tasks.list_by_project(source_id).await {
            Ok(rows) => rows,
            Err(err) => {
                failures.push(SectionFailure::new(
                    Section::Tasks,
                    format!("failed to load tasks: {err}"),
                ));
                return Vec::new();
            }
        };
        rows.sort_by_key(|task| task.created_at());

        let id_map: HashMap<TaskId, TaskId> =
            rows.iter().map(|task| (task.id(), TaskId::new())).collect();
        let mut copied = Vec::new();
        for row in &rows {
            let Some(new_id) = id_map.get(&row.id()).copied() else {
                continue;
            };
            let timestamp = self.clock.utc();
            let copy = Task::from_persisted(PersistedTaskData {
                id: new_id,
                project_id: destination_id,
                parent_id: row
                    .parent_id()
                    .and_then(|parent| id_map.get(&parent).copied()),
                title: row.title().to_owned(),
                description: row.description().map(ToOwned::to_owned),
                status: row.status(),
                due_date: row.due_date(),
                order_index: row.order_index(),
                created_at: timestamp,
                updated_at: timestamp,
            });
            match self.tasks.insert(&copy).await {
                Ok(()) => copied.push((row.id(), new_id)),
                Err(err) => failures.push(SectionFailure::new(
                    Section::Tasks,
                    format!("failed to copy task '{}': {err}", row.title()),
                )),
            }
            self.pause().await;
        }
        tracing::debug!(
            "Copied {} of {} tasks into {}",
            copied.len(),
            rows.len(),
            destination_id
        );
        copied
    }

    /// Copies subtasks and notes for every successfully copied task, keyed
    /// to the destination task ids.
    async fn copy_task_children(
        &self,
        copied_tasks: &[(TaskId, TaskId)],
        failures: &mut Vec<SectionFailure>,
    ) {
        for (source_task, destination_task) in copied_tasks {
            self.copy_subtasks_of(*source_task, *destination_task, failures)
                .await;
            self.copy_notes_of(*source_task, *destination_task, failures)
                .await;
        }
    }

    async fn copy_subtasks_of(
        &self,
        source_task: TaskId,
        destination_task: TaskId,
        failures: &mut Vec<SectionFailure>,
    ) {
        let rows = match self.subtasks.list_subtasks(source_task).await {
            Ok(rows) => rows,
            Err(err) => {
                failures.push(SectionFailure::new(
                    Section::Subtasks,
                    format!("failed to load subtasks of task {source_task}: {err}"),
                ));
                return;
            }
        };
        for row in rows {
            let copy = Subtask::from_persisted(PersistedSubtaskData {
                id: SubtaskId::new(),
                task_id: destination_task,
                title: row.title().to_owned(),
                completed: row.completed(),
                created_at: row.created_at(),
                updated_at: row.updated_at(),
            });
            if let Err(err) = self.subtasks.insert_subtask(&copy).await {
                failures.push(SectionFailure::new(
                    Section::Subtasks,
                    format!("failed to copy subtask '{}': {err}", row.title()),
                ));
            }
            self.pause().await;
        }
    }

    async fn copy_notes_of(
        &self,
        source_task: TaskId,
        destination_task: TaskId,
        failures: &mut Vec<SectionFailure>,
    ) {
        let rows = match self.notes.list_notes(source_task).await {
            Ok(rows) => rows,
            Err(err) => {
                failures.push(SectionFailure::new(
                    Section::TaskNotes,
                    format!("failed to load notes of task {source_task}: {err}"),
                ));
                return;
            }
        };
        for row in rows {
            let copy = TaskNote::from_persisted(
                TaskNoteId::new(),
                destination_task,
                row.content().to_owned(),
                row.created_at(),
            );
            if let Err(err) = self.notes.insert_note(&copy).await {
                failures.push(SectionFailure::new(
                    Section::TaskNotes,
                    format!("failed to copy note: {err}"),
                ));
            }
            self.pause().await;
        }
    }

    /// Runs the per-section copy steps in a fixed order.
    async fn copy_sections(
        &self,
        source_id: ProjectId,
        destination_id: ProjectId,
        owner: UserId,
        failures: &mut Vec<SectionFailure>,
    ) {
        let stores = self.sections.clone();
        self.copy_section(&stores.schedules, source_id, destination_id, owner, failures)
            .await;
        self.copy_section(&stores.documents, source_id, destination_id, owner, failures)
            .await;
        self.copy_section(&stores.meetings, source_id, destination_id, owner, failures)
            .await;
        self.copy_section(&stores.returns, source_id, destination_id, owner, failures)
            .await;
        self.copy_section(
            &stores.design_requirements,
            source_id,
            destination_id,
            owner,
            failures,
        )
        .await;
        self.copy_section(
            &stores.text_requirements,
            source_id,
            destination_id,
            owner,
            failures,
        )
        .await;
        self.copy_section(
            &stores.video_requirements,
            source_id,
            destination_id,
            owner,
            failures,
        )
        .await;
        self.copy_section(
            &stores.image_assets,
            source_id,
            destination_id,
            owner,
            failures,
        )
        .await;
        self.copy_section(
            &stores.project_notes,
            source_id,
            destination_id,
            owner,
            failures,
        )
        .await;
    }

    /// Copies one section's rows, re-homed to the destination project.
    async fn copy_section<R>(
        &self,
        store: &Arc<dyn SectionStore<R>>,
        source_id: ProjectId,
        destination_id: ProjectId,
        owner: UserId,
        failures: &mut Vec<SectionFailure>,
    ) where
        R: SectionRow,
    {
        let rows = match store.list_by_project(source_id).await {
            Ok(rows) => rows,
            Err(err) => {
                failures.push(SectionFailure::new(
                    R::SECTION,
                    format!("failed to load {}: {err}", R::SECTION),
                ));
                return;
            }
        };
        for row in rows {
            let copy = row.duplicated_into(destination_id, owner);
            if let Err(err) = store.insert(&copy).await {
                failures.push(SectionFailure::new(
                    R::SECTION,
                    format!("failed to copy {} row: {err}", R::SECTION),
                ));
            }
            self.pause().await;
        }
    }

    /// Spaces out dependent-row inserts to bias the destination store's
    /// insertion-order bookkeeping towards the source order.
    async fn pause(&self) {
        if !self.insert_pause.is_zero() {
            tokio::time::sleep(self.insert_pause).await;
        }
    }
}
