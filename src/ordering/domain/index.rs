//! The persisted position scalar and the append rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a row within its sibling group.
///
/// Values are intended to be distinct non-negative integers per sibling
/// group, but this is a convention rather than an enforced invariant: legacy
/// rows and unsynchronised appends can collide, and [`super::display_order`]
/// keeps such groups deterministic anyway.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct OrderIndex(i64);

impl OrderIndex {
    /// The first position in an empty sibling group.
    pub const ZERO: Self = Self(0);

    /// Creates an order index from a raw persisted value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the position immediately after this one.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for OrderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes the index for a row appended to a sibling group: one past the
/// current maximum, or [`OrderIndex::ZERO`] for an empty group.
///
/// The caller reads the group and writes the new row separately; nothing
/// serialises concurrent appenders, so two of them can both observe the same
/// maximum. That duplicated index is tolerated and resolved at display time.
#[must_use]
pub fn next_order_index<I>(existing: I) -> OrderIndex
where
    I: IntoIterator<Item = OrderIndex>,
{
    existing
        .into_iter()
        .max()
        .map_or(OrderIndex::ZERO, OrderIndex::successor)
}
