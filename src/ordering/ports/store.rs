//! Write port for persisted order indices.

use crate::ordering::domain::OrderIndex;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for order index writes.
pub type OrderWriteResult<T> = Result<T, OrderWriteError>;

/// Persists one row's order index.
///
/// One implementation exists per orderable table; `Id` is that table's row
/// identifier. Each call is an independent write against the hosted store;
/// the port offers no transaction spanning two calls.
#[async_trait]
pub trait OrderIndexStore<Id>: Send + Sync
where
    Id: Copy + Send + Sync + 'static,
{
    /// Writes the order index for one row.
    ///
    /// # Errors
    ///
    /// Returns [`OrderWriteError`] when the hosted store rejects the write.
    async fn write_order_index(&self, id: Id, index: OrderIndex) -> OrderWriteResult<()>;
}

/// Failure writing an order index to the hosted store.
#[derive(Debug, Clone, Error)]
#[error("order index write failed: {0}")]
pub struct OrderWriteError(Arc<dyn std::error::Error + Send + Sync>);

impl OrderWriteError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
