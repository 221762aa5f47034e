//! Domain model for campaign projects and their dependent sections.

mod error;
mod ids;
mod preferences;
mod project;
mod sections;
mod share;

pub use error::{ParseBrandLineError, ParseProjectStatusError, ProjectDomainError};
pub use ids::{ProjectId, SectionRecordId};
pub use preferences::SectionPreference;
pub use project::{BrandLine, NewProject, PersistedProjectData, Project, ProjectStatus};
pub use sections::{
    DesignRequirement, Document, ImageAsset, Meeting, OrderedSectionRow, ProjectNote, ReturnItem,
    Schedule, Section, SectionRow, TextRequirement, VideoRequirement,
};
pub use share::ShareToken;
