//! In-memory stand-in for the hosted store's change stream.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

use crate::project::domain::ProjectId;
use crate::realtime::{
    domain::ChangeEvent,
    ports::{ChangeFeed, ChangeFeedError, ChangeFeedResult, ChangeSubscription},
};

/// Buffered events per project channel before slow consumers start lagging.
const CHANNEL_CAPACITY: usize = 64;

/// Thread-safe in-memory change feed with one channel per project.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChangeFeed {
    channels: Arc<RwLock<HashMap<ProjectId, broadcast::Sender<ChangeEvent>>>>,
}

impl InMemoryChangeFeed {
    /// Creates a feed with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an event to the subscribers of its project.
    ///
    /// Events for projects nobody subscribed to are dropped, as the hosted
    /// transport would drop them.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeFeedError`] when the channel registry is unavailable.
    pub fn publish(&self, event: ChangeEvent) -> ChangeFeedResult<()> {
        let channels = self.channels.read().map_err(lock_error)?;
        if let Some(sender) = channels.get(&event.project_id) {
            // A send error just means every subscriber already hung up.
            let _delivered = sender.send(event);
        }
        Ok(())
    }

    /// Returns how many live subscriptions the project has.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeFeedError`] when the channel registry is unavailable.
    pub fn subscriber_count(&self, project_id: ProjectId) -> ChangeFeedResult<usize> {
        let channels = self.channels.read().map_err(lock_error)?;
        Ok(channels
            .get(&project_id)
            .map_or(0, broadcast::Sender::receiver_count))
    }
}

fn lock_error(err: impl std::fmt::Display) -> ChangeFeedError {
    ChangeFeedError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ChangeFeed for InMemoryChangeFeed {
    async fn subscribe(&self, project_id: ProjectId) -> ChangeFeedResult<ChangeSubscription> {
        let mut channels = self.channels.write().map_err(lock_error)?;
        let sender = channels
            .entry(project_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        Ok(ChangeSubscription::new(sender.subscribe()))
    }
}
