//! Hierarchical task tracking for campaign projects.
//!
//! Tasks form a forest within their project: any task may name another task
//! in the same project as its parent, siblings are manually ordered through
//! the [`crate::ordering`] module, and each task owns subtask and note child
//! rows. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
