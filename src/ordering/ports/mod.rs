//! Port contracts for persisting order indices.

pub mod store;

pub use store::{OrderIndexStore, OrderWriteError, OrderWriteResult};
