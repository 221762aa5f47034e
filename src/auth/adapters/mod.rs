//! Adapter implementations for the authentication boundary.

pub mod memory;
