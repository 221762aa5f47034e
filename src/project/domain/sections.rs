//! Dependent section rows owned by a project.
//!
//! Every row type here carries the owning project and account plus its own
//! thin payload; none has invariants beyond "belongs to a project". The
//! [`SectionRow`] trait is what the generic store port and the project
//! replicator work against, and [`OrderedSectionRow`] marks the sections the
//! user can reorder manually.

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProjectId, SectionRecordId};
use crate::auth::domain::UserId;
use crate::ordering::domain::{OrderIndex, Sequenced};

/// The dependent collections a project owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Hierarchical tasks.
    Tasks,
    /// Subtask checklist rows.
    Subtasks,
    /// Free-form task notes.
    TaskNotes,
    /// Free-form project notes.
    ProjectNotes,
    /// Timeline schedule rows.
    Schedules,
    /// Linked documents.
    Documents,
    /// Meeting records.
    Meetings,
    /// Backer return tiers.
    Returns,
    /// Design requirements.
    DesignRequirements,
    /// Text-content requirements.
    TextRequirements,
    /// Video requirements.
    VideoRequirements,
    /// Campaign image assets.
    ImageAssets,
}

impl Section {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Subtasks => "subtasks",
            Self::TaskNotes => "task_notes",
            Self::ProjectNotes => "project_notes",
            Self::Schedules => "schedules",
            Self::Documents => "documents",
            Self::Meetings => "meetings",
            Self::Returns => "returns",
            Self::DesignRequirements => "design_requirements",
            Self::TextRequirements => "text_requirements",
            Self::VideoRequirements => "video_requirements",
            Self::ImageAssets => "image_assets",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row stored in one of the project section tables.
pub trait SectionRow: Clone + Send + Sync + 'static {
    /// The section this row type belongs to.
    const SECTION: Section;

    /// Returns the row identifier.
    fn id(&self) -> SectionRecordId;

    /// Returns the owning project.
    fn project_id(&self) -> ProjectId;

    /// Returns the row creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;

    /// Returns a copy of this row re-homed to another project and owner,
    /// under a fresh identifier.
    #[must_use]
    fn duplicated_into(&self, project_id: ProjectId, owner: UserId) -> Self;
}

/// A section row the user can reorder manually.
pub trait OrderedSectionRow: SectionRow {
    /// Returns the position within the project's rows of this section.
    fn order_index(&self) -> OrderIndex;

    /// Overwrites the position.
    fn set_order_index(&mut self, order_index: OrderIndex);
}

macro_rules! impl_section_row {
    ($row:ty, $section:expr) => {
        impl SectionRow for $row {
            const SECTION: Section = $section;

            fn id(&self) -> SectionRecordId {
                self.id
            }

            fn project_id(&self) -> ProjectId {
                self.project_id
            }

            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }

            fn duplicated_into(&self, project_id: ProjectId, owner: UserId) -> Self {
                Self {
                    id: SectionRecordId::new(),
                    project_id,
                    user_id: owner,
                    ..self.clone()
                }
            }
        }
    };
}

macro_rules! impl_ordered_section_row {
    ($row:ty, $section:expr) => {
        impl_section_row!($row, $section);

        impl OrderedSectionRow for $row {
            fn order_index(&self) -> OrderIndex {
                self.order_index
            }

            fn set_order_index(&mut self, order_index: OrderIndex) {
                self.order_index = order_index;
            }
        }

        impl Sequenced for $row {
            fn order_index(&self) -> OrderIndex {
                self.order_index
            }

            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        }
    };
}

/// One row of the project timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Milestone title.
    pub title: String,
    /// When the milestone window opens, if planned.
    pub starts_on: Option<NaiveDate>,
    /// When the milestone window closes, if planned.
    pub ends_on: Option<NaiveDate>,
    /// Free-form memo cell.
    pub memo: Option<String>,
    /// Position within the project's schedule rows.
    pub order_index: OrderIndex,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    /// Creates a schedule row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        title: impl Into<String>,
        order_index: OrderIndex,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            title: title.into(),
            starts_on: None,
            ends_on: None,
            memo: None,
            order_index,
            created_at: clock.utc(),
        }
    }
}

impl_ordered_section_row!(Schedule, Section::Schedules);

/// A linked document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Link to the stored document, if uploaded.
    pub url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Creates a document row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            name: name.into(),
            url: None,
            created_at: clock.utc(),
        }
    }
}

impl_section_row!(Document, Section::Documents);

/// A meeting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Meeting title.
    pub title: String,
    /// When the meeting took place, if scheduled.
    pub held_on: Option<NaiveDate>,
    /// Meeting minutes.
    pub minutes: Option<String>,
    /// Position within the project's meeting rows.
    pub order_index: OrderIndex,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    /// Creates a meeting row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        title: impl Into<String>,
        order_index: OrderIndex,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            title: title.into(),
            held_on: None,
            minutes: None,
            order_index,
            created_at: clock.utc(),
        }
    }
}

impl_ordered_section_row!(Meeting, Section::Meetings);

/// A backer return tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Tier title.
    pub title: String,
    /// Pledge amount in the campaign currency's smallest unit.
    pub amount: Option<i64>,
    /// What the backer receives.
    pub description: Option<String>,
    /// Position within the project's return tiers.
    pub order_index: OrderIndex,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ReturnItem {
    /// Creates a return tier row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        title: impl Into<String>,
        order_index: OrderIndex,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            title: title.into(),
            amount: None,
            description: None,
            order_index,
            created_at: clock.utc(),
        }
    }
}

impl_ordered_section_row!(ReturnItem, Section::Returns);

/// A design requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRequirement {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Requirement title.
    pub title: String,
    /// Requirement detail.
    pub detail: Option<String>,
    /// Position within the project's design requirements.
    pub order_index: OrderIndex,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl DesignRequirement {
    /// Creates a design requirement row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        title: impl Into<String>,
        order_index: OrderIndex,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            title: title.into(),
            detail: None,
            order_index,
            created_at: clock.utc(),
        }
    }
}

impl_ordered_section_row!(DesignRequirement, Section::DesignRequirements);

/// A text-content requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRequirement {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Copy block heading.
    pub heading: String,
    /// Copy block body.
    pub body: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TextRequirement {
    /// Creates a text-content requirement row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        heading: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            heading: heading.into(),
            body: None,
            created_at: clock.utc(),
        }
    }
}

impl_section_row!(TextRequirement, Section::TextRequirements);

/// A video requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRequirement {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Video title.
    pub title: String,
    /// Link to the cut, if delivered.
    pub url: Option<String>,
    /// Production notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl VideoRequirement {
    /// Creates a video requirement row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            title: title.into(),
            url: None,
            notes: None,
            created_at: clock.utc(),
        }
    }
}

impl_section_row!(VideoRequirement, Section::VideoRequirements);

/// A campaign image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Link to the stored image.
    pub url: String,
    /// Caption shown under the image.
    pub caption: Option<String>,
    /// Position within the project's image assets.
    pub order_index: OrderIndex,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ImageAsset {
    /// Creates an image asset row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        url: impl Into<String>,
        order_index: OrderIndex,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            url: url.into(),
            caption: None,
            order_index,
            created_at: clock.utc(),
        }
    }
}

impl_ordered_section_row!(ImageAsset, Section::ImageAssets);

/// A free-form project note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNote {
    /// Row identifier.
    pub id: SectionRecordId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning account.
    pub user_id: UserId,
    /// Note content.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ProjectNote {
    /// Creates a project note row.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SectionRecordId::new(),
            project_id,
            user_id,
            content: content.into(),
            created_at: clock.utc(),
        }
    }
}

impl_section_row!(ProjectNote, Section::ProjectNotes);
