//! Move-up/move-down over a loaded, already-sorted sibling list.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::ordering::domain::SequencedEntry;
use crate::ordering::ports::{OrderIndexStore, OrderWriteError};

/// Result type for sequencer operations.
pub type SequencerResult<T> = Result<T, SequencerError>;

/// What a move operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The row exchanged indices with its neighbour.
    Moved,
    /// The row was already at the edge of the list; nothing was written.
    Boundary,
}

/// Errors returned by move operations.
#[derive(Debug, Clone, Error)]
pub enum SequencerError {
    /// The caller's position does not exist in the loaded list.
    #[error("position {position} out of range for {len} loaded rows")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// The loaded list length.
        len: usize,
    },

    /// A write to the hosted store failed.
    #[error(transparent)]
    Store(#[from] OrderWriteError),
}

/// Exchanges order indices between a row and its neighbour in a loaded list.
///
/// The exchange is two independent writes, not an atomic swap: the neighbour
/// takes the moved row's old index first, then the moved row takes the
/// neighbour's. A failure between the two leaves a transient duplicate pair
/// of indices in the store; callers re-fetch the list afterwards, which
/// re-derives a stable display order from whatever was persisted.
#[derive(Clone)]
pub struct OrderSequencer<S> {
    store: Arc<S>,
}

impl<S> OrderSequencer<S> {
    /// Creates a sequencer writing through the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Moves the row at `position` one place towards the front.
    ///
    /// Moving the first row is a [`MoveOutcome::Boundary`] no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::PositionOutOfRange`] when `position` is not
    /// a valid index into `entries`, or [`SequencerError::Store`] when a
    /// write fails (state is whatever the last successful write produced).
    pub async fn move_up<Id>(
        &self,
        entries: &[SequencedEntry<Id>],
        position: usize,
    ) -> SequencerResult<MoveOutcome>
    where
        Id: Copy + Send + Sync + fmt::Debug + 'static,
        S: OrderIndexStore<Id>,
    {
        let moved = entry_at(entries, position)?;
        let Some(neighbour_position) = position.checked_sub(1) else {
            return Ok(MoveOutcome::Boundary);
        };
        let neighbour = entry_at(entries, neighbour_position)?;
        self.exchange(moved, neighbour).await
    }

    /// Moves the row at `position` one place towards the back.
    ///
    /// Moving the last row is a [`MoveOutcome::Boundary`] no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::PositionOutOfRange`] when `position` is not
    /// a valid index into `entries`, or [`SequencerError::Store`] when a
    /// write fails (state is whatever the last successful write produced).
    pub async fn move_down<Id>(
        &self,
        entries: &[SequencedEntry<Id>],
        position: usize,
    ) -> SequencerResult<MoveOutcome>
    where
        Id: Copy + Send + Sync + fmt::Debug + 'static,
        S: OrderIndexStore<Id>,
    {
        let moved = entry_at(entries, position)?;
        let neighbour_position = position.saturating_add(1);
        if neighbour_position == entries.len() {
            return Ok(MoveOutcome::Boundary);
        }
        let neighbour = entry_at(entries, neighbour_position)?;
        self.exchange(moved, neighbour).await
    }

    /// Writes the neighbour's new index, then the moved row's.
    async fn exchange<Id>(
        &self,
        moved: SequencedEntry<Id>,
        neighbour: SequencedEntry<Id>,
    ) -> SequencerResult<MoveOutcome>
    where
        Id: Copy + Send + Sync + fmt::Debug + 'static,
        S: OrderIndexStore<Id>,
    {
        if let Err(err) = self
            .store
            .write_order_index(neighbour.id(), moved.order_index())
            .await
        {
            tracing::warn!("reorder aborted, neighbour write failed: {}", err);
            return Err(err.into());
        }
        if let Err(err) = self
            .store
            .write_order_index(moved.id(), neighbour.order_index())
            .await
        {
            tracing::warn!(
                "reorder aborted after partial write, row {:?} keeps index {}: {}",
                moved.id(),
                moved.order_index(),
                err
            );
            return Err(err.into());
        }
        Ok(MoveOutcome::Moved)
    }
}

fn entry_at<Id>(
    entries: &[SequencedEntry<Id>],
    position: usize,
) -> SequencerResult<SequencedEntry<Id>>
where
    Id: Copy,
{
    entries
        .get(position)
        .copied()
        .ok_or(SequencerError::PositionOutOfRange {
            position,
            len: entries.len(),
        })
}
