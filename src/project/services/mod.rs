//! Service layer for project lifecycle, sharing, preferences, and
//! duplication.

pub mod lifecycle;
pub mod preferences;
pub mod replication;

pub use lifecycle::{
    CreateProjectRequest, EditProjectRequest, ProjectLifecycleError, ProjectLifecycleResult,
    ProjectService,
};
pub use preferences::PreferenceService;
pub use replication::{
    ProjectReplicator, ReplicationError, ReplicationReport, SectionFailure, SectionStores,
};
