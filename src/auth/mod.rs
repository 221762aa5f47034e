//! Viewer identity and the hosted authentication boundary.
//!
//! Authentication itself is delegated to the hosted data service; this
//! module models the identity values the rest of the crate consumes and the
//! port through which the external service is reached. The viewer identity
//! used to scope anonymous UI preferences is an explicit value resolved once
//! per UI session and threaded through calls, never ambient global state.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
