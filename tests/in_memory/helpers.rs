//! Shared test helpers for in-memory adapter integration tests.

use std::sync::Arc;
use std::time::Duration;

use crowdplan::project::{
    adapters::memory::{InMemoryProjectRepository, InMemorySectionStore},
    domain::{
        DesignRequirement, Document, ImageAsset, Meeting, ProjectNote, ReturnItem, Schedule,
        TextRequirement, VideoRequirement,
    },
    services::{ProjectReplicator, ProjectService, SectionStores},
};
use crowdplan::task::{adapters::memory::InMemoryTaskStore, services::TaskService};
use mockable::DefaultClock;
use rstest::fixture;

/// Project service type used by the integration tests.
pub type TestProjectService = ProjectService<InMemoryProjectRepository, DefaultClock>;

/// Task service type used by the integration tests.
pub type TestTaskService =
    TaskService<InMemoryTaskStore, InMemoryTaskStore, InMemoryTaskStore, DefaultClock>;

/// Replicator type used by the integration tests.
pub type TestReplicator = ProjectReplicator<
    InMemoryProjectRepository,
    InMemoryTaskStore,
    InMemoryTaskStore,
    InMemoryTaskStore,
    DefaultClock,
>;

/// One application core wired over shared in-memory adapters.
pub struct App {
    /// The shared project repository.
    pub projects: InMemoryProjectRepository,
    /// The shared task/subtask/note store.
    pub tasks: InMemoryTaskStore,
    /// The shared section stores.
    pub sections: SectionStores,
    /// Project lifecycle service over [`Self::projects`].
    pub project_service: TestProjectService,
    /// Task lifecycle service over [`Self::tasks`].
    pub task_service: TestTaskService,
    /// Replicator over all of the above, with inserts unpaused.
    pub replicator: TestReplicator,
}

/// Provides a freshly wired application core for each test.
#[fixture]
#[must_use]
pub fn app() -> App {
    let projects = InMemoryProjectRepository::new();
    let tasks = InMemoryTaskStore::new();
    let sections = SectionStores {
        schedules: Arc::new(InMemorySectionStore::<Schedule>::new()),
        documents: Arc::new(InMemorySectionStore::<Document>::new()),
        meetings: Arc::new(InMemorySectionStore::<Meeting>::new()),
        returns: Arc::new(InMemorySectionStore::<ReturnItem>::new()),
        design_requirements: Arc::new(InMemorySectionStore::<DesignRequirement>::new()),
        text_requirements: Arc::new(InMemorySectionStore::<TextRequirement>::new()),
        video_requirements: Arc::new(InMemorySectionStore::<VideoRequirement>::new()),
        image_assets: Arc::new(InMemorySectionStore::<ImageAsset>::new()),
        project_notes: Arc::new(InMemorySectionStore::<ProjectNote>::new()),
    };
    let clock = Arc::new(DefaultClock);
    let project_service = ProjectService::new(Arc::new(projects.clone()), clock.clone());
    let task_service = TaskService::new(
        Arc::new(tasks.clone()),
        Arc::new(tasks.clone()),
        Arc::new(tasks.clone()),
        clock.clone(),
    );
    let replicator = ProjectReplicator::new(
        Arc::new(projects.clone()),
        Arc::new(tasks.clone()),
        Arc::new(tasks.clone()),
        Arc::new(tasks.clone()),
        sections.clone(),
        clock,
    )
    .with_insert_pause(Duration::ZERO);
    App {
        projects,
        tasks,
        sections,
        project_service,
        task_service,
        replicator,
    }
}
