//! Shared world state for project duplication BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crowdplan::auth::domain::UserId;
use crowdplan::project::{
    adapters::memory::{InMemoryProjectRepository, InMemorySectionStore},
    domain::{
        DesignRequirement, Document, ImageAsset, Meeting, Project, ProjectId, ProjectNote,
        ReturnItem, Schedule, SectionRecordId, TextRequirement, VideoRequirement,
    },
    ports::{SectionStore, SectionStoreError, SectionStoreResult},
    services::{ProjectReplicator, ReplicationError, ReplicationReport, SectionStores},
};
use crowdplan::task::{adapters::memory::InMemoryTaskStore, domain::Task};
use mockable::DefaultClock;
use rstest::fixture;

/// Replicator type used by the BDD world.
pub type TestReplicator = ProjectReplicator<
    InMemoryProjectRepository,
    InMemoryTaskStore,
    InMemoryTaskStore,
    InMemoryTaskStore,
    DefaultClock,
>;

/// Schedule store double whose inserts always fail.
#[derive(Debug, Clone)]
pub struct RejectingScheduleStore {
    inner: Arc<InMemorySectionStore<Schedule>>,
}

#[async_trait]
impl SectionStore<Schedule> for RejectingScheduleStore {
    async fn insert(&self, _row: &Schedule) -> SectionStoreResult<()> {
        Err(SectionStoreError::persistence(std::io::Error::other(
            "insert rejected",
        )))
    }

    async fn update(&self, row: &Schedule) -> SectionStoreResult<()> {
        self.inner.update(row).await
    }

    async fn upsert(&self, row: &Schedule) -> SectionStoreResult<()> {
        self.inner.upsert(row).await
    }

    async fn delete(&self, id: SectionRecordId) -> SectionStoreResult<()> {
        self.inner.delete(id).await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> SectionStoreResult<Vec<Schedule>> {
        self.inner.list_by_project(project_id).await
    }
}

/// Scenario world for project duplication behaviour tests.
pub struct DuplicationWorld {
    pub projects: InMemoryProjectRepository,
    pub tasks: InMemoryTaskStore,
    pub schedules: Arc<InMemorySectionStore<Schedule>>,
    pub reject_schedule_inserts: bool,
    pub owner: UserId,
    pub source: Option<Project>,
    pub first_task: Option<Task>,
    pub last_result: Option<Result<ReplicationReport, ReplicationError>>,
}

impl DuplicationWorld {
    /// Creates a world with empty stores and no scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: InMemoryProjectRepository::new(),
            tasks: InMemoryTaskStore::new(),
            schedules: Arc::new(InMemorySectionStore::new()),
            reject_schedule_inserts: false,
            owner: UserId::new(),
            source: None,
            first_task: None,
            last_result: None,
        }
    }

    /// Builds the replicator over the world's stores, honouring the
    /// rejecting-schedule-store flag.
    #[must_use]
    pub fn replicator(&self) -> TestReplicator {
        let schedules: Arc<dyn SectionStore<Schedule>> = if self.reject_schedule_inserts {
            Arc::new(RejectingScheduleStore {
                inner: self.schedules.clone(),
            })
        } else {
            self.schedules.clone()
        };
        let sections = SectionStores {
            schedules,
            documents: Arc::new(InMemorySectionStore::<Document>::new()),
            meetings: Arc::new(InMemorySectionStore::<Meeting>::new()),
            returns: Arc::new(InMemorySectionStore::<ReturnItem>::new()),
            design_requirements: Arc::new(InMemorySectionStore::<DesignRequirement>::new()),
            text_requirements: Arc::new(InMemorySectionStore::<TextRequirement>::new()),
            video_requirements: Arc::new(InMemorySectionStore::<VideoRequirement>::new()),
            image_assets: Arc::new(InMemorySectionStore::<ImageAsset>::new()),
            project_notes: Arc::new(InMemorySectionStore::<ProjectNote>::new()),
        };
        ProjectReplicator::new(
            Arc::new(self.projects.clone()),
            Arc::new(self.tasks.clone()),
            Arc::new(self.tasks.clone()),
            Arc::new(self.tasks.clone()),
            sections,
            Arc::new(DefaultClock),
        )
        .with_insert_pause(Duration::ZERO)
    }
}

impl Default for DuplicationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DuplicationWorld {
    DuplicationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
