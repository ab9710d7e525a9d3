//! Session stock log - stock movements made since the process started.
//!
//! Entries are kept newest first and capped; nothing here is persisted. The authoritative
//! movement history is the per-product transaction log held by the backend.

use crate::entities::{Movement, StockAdjustment};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Default number of movements retained.
pub const RECENT_MOVEMENT_LIMIT: usize = 20;

/// One stock movement made during this session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentMovement {
    /// Product name at the time of the movement
    pub product_name: String,
    /// Direction of the movement
    pub movement: Movement,
    /// Units moved
    pub value: u64,
    /// When the movement was submitted
    pub at: DateTime<Utc>,
}

/// Bounded newest-first log of this session's movements.
#[derive(Clone, Debug)]
pub struct RecentMovements {
    entries: VecDeque<RecentMovement>,
    limit: usize,
}

impl Default for RecentMovements {
    fn default() -> Self {
        Self::with_limit(RECENT_MOVEMENT_LIMIT)
    }
}

impl RecentMovements {
    /// Creates an empty log that keeps at most `limit` entries.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Records a submitted adjustment at the current time.
    pub fn record(&mut self, product_name: &str, adjustment: &StockAdjustment) {
        self.record_at(product_name, adjustment, Utc::now());
    }

    /// Records a submitted adjustment at the given time.
    pub fn record_at(
        &mut self,
        product_name: &str,
        adjustment: &StockAdjustment,
        at: DateTime<Utc>,
    ) {
        if self.limit == 0 {
            return;
        }
        self.entries.push_front(RecentMovement {
            product_name: product_name.to_string(),
            movement: adjustment.movement,
            value: adjustment.value,
            at,
        });
        self.entries.truncate(self.limit);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &RecentMovement> {
        self.entries.iter()
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
