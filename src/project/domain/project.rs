//! Project aggregate root, status lifecycle, and brand lines.

use super::{
    ParseBrandLineError, ParseProjectStatusError, ProjectDomainError, ProjectId, ShareToken,
};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// The campaign is actively being prepared or run.
    #[default]
    InProgress,
    /// Work is paused.
    OnHold,
    /// The campaign has concluded.
    Done,
    /// The campaign is shortlisted for the curated picks page.
    Picks,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::Done => "done",
            Self::Picks => "picks",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "in_progress" => Ok(Self::InProgress),
            "on_hold" => Ok(Self::OnHold),
            "done" => Ok(Self::Done),
            "picks" => Ok(Self::Picks),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// The brand line a campaign runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandLine {
    /// The flagship brand.
    BrandA,
    /// The sister brand.
    BrandB,
}

impl BrandLine {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BrandA => "brand_a",
            Self::BrandB => "brand_b",
        }
    }
}

impl TryFrom<&str> for BrandLine {
    type Error = ParseBrandLineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "brand_a" => Ok(Self::BrandA),
            "brand_b" => Ok(Self::BrandB),
            _ => Err(ParseBrandLineError(value.to_owned())),
        }
    }
}

/// Validated input for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Project name; must not be blank.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// The brand line the campaign runs under.
    pub brand: BrandLine,
    /// The owning account.
    pub owner: UserId,
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: Option<String>,
    status: ProjectStatus,
    brand: BrandLine,
    is_shared: bool,
    share_token: Option<ShareToken>,
    shared_at: Option<DateTime<Utc>>,
    owner: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted workflow state.
    pub status: ProjectStatus,
    /// Persisted brand line.
    pub brand: BrandLine,
    /// Persisted sharing flag.
    pub is_shared: bool,
    /// Persisted share token, if one was ever issued.
    pub share_token: Option<ShareToken>,
    /// Persisted sharing timestamp, if any.
    pub shared_at: Option<DateTime<Utc>>,
    /// Persisted owning account.
    pub owner: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new unshared project in the in-progress state.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the name is blank.
    pub fn create(input: NewProject, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        let name = normalized_name(&input.name)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            name,
            description: input.description,
            status: ProjectStatus::InProgress,
            brand: input.brand,
            is_shared: false,
            share_token: None,
            shared_at: None,
            owner: input.owner,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            status: data.status,
            brand: data.brand,
            is_shared: data.is_shared,
            share_token: data.share_token,
            shared_at: data.shared_at,
            owner: data.owner,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow state.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the brand line.
    #[must_use]
    pub const fn brand(&self) -> BrandLine {
        self.brand
    }

    /// Returns whether the read-only shared view is reachable.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        self.is_shared
    }

    /// Returns the share token, if one was ever issued.
    ///
    /// A token may linger after sharing is disabled; it grants nothing while
    /// [`Self::is_shared`] is false.
    #[must_use]
    pub const fn share_token(&self) -> Option<&ShareToken> {
        self.share_token.as_ref()
    }

    /// Returns when sharing was last enabled, if ever.
    #[must_use]
    pub const fn shared_at(&self) -> Option<DateTime<Utc>> {
        self.shared_at
    }

    /// Returns the owning account.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the name a duplicate of this project is created under.
    #[must_use]
    pub fn duplicate_name(&self) -> String {
        format!("{} copy", self.name)
    }

    /// Replaces the name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the new name is blank.
    pub fn set_name(
        &mut self,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        self.name = normalized_name(&name.into())?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Moves the project to a new workflow state.
    pub fn set_status(&mut self, status: ProjectStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Enables the read-only shared view under the given token.
    ///
    /// Always installs the fresh token, so re-enabling sharing invalidates
    /// any link issued before.
    pub fn enable_sharing(&mut self, token: ShareToken, clock: &impl Clock) {
        self.is_shared = true;
        self.share_token = Some(token);
        self.shared_at = Some(clock.utc());
        self.touch(clock);
    }

    /// Disables the read-only shared view.
    ///
    /// The token column is left in place but grants nothing until sharing is
    /// enabled again with a fresh token.
    pub fn disable_sharing(&mut self, clock: &impl Clock) {
        self.is_shared = false;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Trims the name and rejects blank values.
fn normalized_name(raw: &str) -> Result<String, ProjectDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ProjectDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}
