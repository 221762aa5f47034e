//! Port contracts for the change-notification boundary.

pub mod feed;

pub use feed::{ChangeFeed, ChangeFeedError, ChangeFeedResult, ChangeSubscription};
