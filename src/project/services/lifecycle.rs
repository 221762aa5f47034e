//! Service layer for project creation, editing, and sharing.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::auth::domain::UserId;
use crate::project::{
    domain::{
        BrandLine, NewProject, Project, ProjectDomainError, ProjectId, ProjectStatus, ShareToken,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    owner: UserId,
    name: String,
    brand: BrandLine,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(owner: UserId, name: impl Into<String>, brand: BrandLine) -> Self {
        Self {
            owner,
            name: name.into(),
            brand,
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for editing a project's user-visible fields.
///
/// Carries the full replacement values the edit form submits; an omitted
/// description clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditProjectRequest {
    name: String,
    description: Option<String>,
}

impl EditProjectRequest {
    /// Creates an edit with the replacement name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for project lifecycle service operations.
pub type ProjectLifecycleResult<T> = Result<T, ProjectLifecycleError>;

/// Project lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProjectService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project lifecycle service.
    #[must_use]
    pub const fn new(projects: Arc<R>, clock: Arc<C>) -> Self {
        Self { projects, clock }
    }

    /// Creates an unshared project in the in-progress state.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the name is blank or
    /// persistence fails.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectLifecycleResult<Project> {
        let project = Project::create(
            NewProject {
                name: request.name,
                description: request.description,
                brand: request.brand,
                owner: request.owner,
            },
            &*self.clock,
        )?;
        self.projects.insert(&project).await?;
        Ok(project)
    }

    /// Replaces a project's name and description.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the project is missing, the
    /// new name is blank, or persistence fails.
    pub async fn edit(
        &self,
        id: ProjectId,
        request: EditProjectRequest,
    ) -> ProjectLifecycleResult<Project> {
        let mut project = self.fetch(id).await?;
        project.set_name(request.name, &*self.clock)?;
        project.set_description(request.description, &*self.clock);
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Moves a project to a new workflow state.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the project is missing or
    /// persistence fails.
    pub async fn change_status(
        &self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> ProjectLifecycleResult<Project> {
        let mut project = self.fetch(id).await?;
        project.set_status(status, &*self.clock);
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Deletes a project row; dependent section rows cascade inside the
    /// hosted store.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the project is missing or
    /// persistence fails.
    pub async fn delete(&self, id: ProjectId) -> ProjectLifecycleResult<()> {
        self.projects.delete(id).await?;
        tracing::debug!("Deleted project: {}", id);
        Ok(())
    }

    /// Returns the owner's projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Repository`] when the load fails.
    pub async fn list_by_owner(&self, owner: UserId) -> ProjectLifecycleResult<Vec<Project>> {
        let projects = self.projects.list_by_owner(owner).await?;
        Ok(projects)
    }

    /// Enables the read-only shared view, issuing a fresh token.
    ///
    /// Re-enabling sharing rotates the token, so links issued before stop
    /// resolving.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the project is missing or
    /// persistence fails.
    pub async fn enable_sharing(&self, id: ProjectId) -> ProjectLifecycleResult<Project> {
        let mut project = self.fetch(id).await?;
        project.enable_sharing(ShareToken::generate(), &*self.clock);
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Disables the read-only shared view.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the project is missing or
    /// persistence fails.
    pub async fn disable_sharing(&self, id: ProjectId) -> ProjectLifecycleResult<Project> {
        let mut project = self.fetch(id).await?;
        project.disable_sharing(&*self.clock);
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Resolves a shared-view token to its project.
    ///
    /// Returns `None` when no project carries the token or the project's
    /// sharing has been disabled; an unknown token and a revoked link look
    /// the same to the visitor.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Repository`] when the lookup fails.
    pub async fn find_shared(
        &self,
        token: &ShareToken,
    ) -> ProjectLifecycleResult<Option<Project>> {
        let found = self.projects.find_by_share_token(token).await?;
        Ok(found.filter(Project::is_shared))
    }

    async fn fetch(&self, id: ProjectId) -> ProjectLifecycleResult<Project> {
        let found = self.projects.find_by_id(id).await?;
        found
            .ok_or(ProjectRepositoryError::ProjectNotFound(id))
            .map_err(ProjectLifecycleError::from)
    }
}
