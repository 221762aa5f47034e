//! Crowdplan: campaign project-coordination core.
//!
//! This crate provides the backend-agnostic core of a project-management
//! application for crowdfunding-campaign workflows: hierarchical task
//! tracking, manual list ordering, project sharing, and whole-project
//! duplication across every dependent section.
//!
//! The hosted data service, authentication backend, and realtime transport
//! are external collaborators reached only through port traits; in-memory
//! adapters stand in for them in tests.
//!
//! # Architecture
//!
//! Crowdplan follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (hosted store, tests)
//!
//! # Modules
//!
//! - [`auth`]: Viewer identity and the hosted authentication boundary
//! - [`ordering`]: Manual list ordering via persisted order indices
//! - [`task`]: Hierarchical task records, subtasks, and notes
//! - [`project`]: Project aggregate, dependent sections, sharing, duplication
//! - [`realtime`]: Change-notification boundary for live views

pub mod auth;
pub mod ordering;
pub mod project;
pub mod realtime;
pub mod task;
