//! Repository port for project persistence and lookup.

use crate::auth::domain::UserId;
use crate::project::domain::{Project, ProjectId, ShareToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Deleting a project is expected to cascade to its dependent section rows
/// inside the hosted store's referential-integrity configuration; the port
/// only removes the project row.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the project
    /// ID already exists.
    async fn insert(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Persists changes to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::ProjectNotFound`] when the project
    /// does not exist.
    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Deletes a project row.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::ProjectNotFound`] when the project
    /// does not exist.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Finds a project by its share token, regardless of whether sharing is
    /// currently enabled.
    ///
    /// Returns `None` when no project carries the token.
    async fn find_by_share_token(
        &self,
        token: &ShareToken,
    ) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns the owner's projects, newest first.
    async fn list_by_owner(&self, owner: UserId) -> ProjectRepositoryResult<Vec<Project>>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
