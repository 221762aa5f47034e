//! Subscription port for project change events.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::project::domain::ProjectId;
use crate::realtime::domain::ChangeEvent;

/// Result type for change feed operations.
pub type ChangeFeedResult<T> = Result<T, ChangeFeedError>;

/// Delivers row-level change events for one project.
#[async_trait]
pub trait ChangeFeed: Send + Sync {
    /// Opens a subscription to the project's change events.
    ///
    /// Events published before the subscription opened are not replayed.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeFeedError`] when the transport rejects the
    /// subscription.
    async fn subscribe(&self, project_id: ProjectId) -> ChangeFeedResult<ChangeSubscription>;
}

/// A live subscription handle.
///
/// Delivery is at-least-once: a slow consumer that falls behind skips the
/// overwritten events and keeps receiving from the current position.
/// Dropping the handle tears the subscription down.
#[derive(Debug)]
pub struct ChangeSubscription {
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl ChangeSubscription {
    /// Wraps a transport receiver.
    #[must_use]
    pub const fn new(receiver: broadcast::Receiver<ChangeEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next change event.
    ///
    /// Returns `None` once the feed has shut down and every pending event
    /// has been consumed.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Change subscription lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// Errors returned by change feed implementations.
#[derive(Debug, Clone, Error)]
pub enum ChangeFeedError {
    /// Transport-layer failure reaching the hosted store.
    #[error("change feed transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChangeFeedError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
