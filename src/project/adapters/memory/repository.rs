//! In-memory stand-in for the hosted project table.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::project::{
    domain::{Project, ProjectId, ShareToken},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut rows = self.state.write().map_err(lock_error)?;
        if rows.iter().any(|row| row.id() == project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        rows.push(project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut rows = self.state.write().map_err(lock_error)?;
        let slot = rows
            .iter_mut()
            .find(|row| row.id() == project.id())
            .ok_or(ProjectRepositoryError::ProjectNotFound(project.id()))?;
        *slot = project.clone();
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut rows = self.state.write().map_err(lock_error)?;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(ProjectRepositoryError::ProjectNotFound(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let rows = self.state.read().map_err(lock_error)?;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn find_by_share_token(
        &self,
        token: &ShareToken,
    ) -> ProjectRepositoryResult<Option<Project>> {
        let rows = self.state.read().map_err(lock_error)?;
        Ok(rows
            .iter()
            .find(|row| row.share_token() == Some(token))
            .cloned())
    }

    async fn list_by_owner(&self, owner: UserId) -> ProjectRepositoryResult<Vec<Project>> {
        let rows = self.state.read().map_err(lock_error)?;
        let mut owned: Vec<Project> = rows
            .iter()
            .filter(|row| row.owner() == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(owned)
    }
}
