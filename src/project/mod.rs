//! Campaign projects and everything that hangs off them.
//!
//! A project owns its dependent sections (tasks, schedules, documents,
//! meetings, returns, requirements, image assets, notes) by foreign key,
//! carries the sharing state behind token-scoped read-only links, and can be
//! duplicated wholesale into a fresh copy. The module follows hexagonal
//! architecture:
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
