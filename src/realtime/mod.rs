//! Change-notification boundary for live views.
//!
//! The hosted store pushes row-level change events, at least once, to
//! whichever views subscribed; progress bars re-render from them without
//! polling. Delivery, reconnection, and replay are all the external
//! transport's concern; nothing here buffers missed events. A subscription
//! lives as long as its handle: dropping the handle when a view unmounts
//! tears the subscription down.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
