//! Manual list ordering via persisted order indices.
//!
//! Several entity kinds (tasks, schedules, returns, meetings, design
//! requirements, image assets) carry a plain integer `order_index` that the
//! user rearranges with up/down controls. This module owns the append rule,
//! the neighbour exchange used by the move operations, and the deterministic
//! display sort that keeps legacy index collisions stable.
//!
//! The exchange is deliberately non-atomic: two independent writes through
//! the [`ports::OrderIndexStore`] port, matching the optimistic single-writer
//! discipline of the hosted store. Callers re-fetch the affected list after
//! any failure; the port boundary exists so a server-side atomic swap can
//! replace the adapter without touching callers.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
