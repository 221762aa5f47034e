//! Orchestration services for manual reordering.

pub mod sequencer;

pub use sequencer::{MoveOutcome, OrderSequencer, SequencerError, SequencerResult};
