//! Adapter implementations of the change-notification boundary.

pub mod memory;
