// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Capacity schedule for the Puka Cuckoo Hash table.
//!
//! Tables grow through a fixed ascending list of primes, each roughly twice the
//! previous one. The eviction-chain bound is derived from the capacity so that the
//! expected insertion cost stays constant as the table grows.

use crate::data_structures::puka_cuckoo_hash::error::{PukaCuckooHashError, Result};

/// Slots per bucket array, in growth order.
#[allow(clippy::unreadable_literal)]
pub const CAPACITY_SCHEDULE: [usize; 27] = [
    13, 29, 59, 127, 257, 541, 1109, 2357, 5087, 10273, 20753, 42043, 85229, 172933, 351061,
    712697, 1447153, 2938679, 5967347, 12114731, 24599317, 49945361, 101406157, 205912397,
    418083943, 848846161, 1723405631,
];

/// Default multiplier applied to `ceil(log2(capacity))` to obtain the eviction bound.
pub const DEFAULT_STEPS_PER_LOG2: usize = 6;

/// A view over [`CAPACITY_SCHEDULE`], optionally truncated to a maximum index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacitySchedule {
    last_index: usize,
}

impl CapacitySchedule {
    /// Creates a schedule covering every entry of [`CAPACITY_SCHEDULE`].
    pub fn new() -> Self {
        Self {
            last_index: CAPACITY_SCHEDULE.len() - 1,
        }
    }

    /// Creates a schedule that never grows past `max_index`.
    ///
    /// Indices beyond the end of [`CAPACITY_SCHEDULE`] are clamped to the last entry.
    pub fn bounded(max_index: usize) -> Self {
        Self {
            last_index: max_index.min(CAPACITY_SCHEDULE.len() - 1),
        }
    }

    /// Number of usable entries.
    pub fn len(&self) -> usize {
        self.last_index + 1
    }

    /// Always false; a schedule holds at least one capacity.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the largest usable entry.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Returns the capacity at `index`.
    ///
    /// # Errors
    ///
    /// [`PukaCuckooHashError::InvalidSizeIndex`] if `index` is past the usable range.
    pub fn capacity_at(&self, index: usize) -> Result<usize> {
        if index > self.last_index {
            return Err(PukaCuckooHashError::InvalidSizeIndex {
                index,
                len: self.len(),
            });
        }
        Ok(CAPACITY_SCHEDULE[index])
    }

    /// Returns the position and capacity following `index`.
    ///
    /// # Errors
    ///
    /// [`PukaCuckooHashError::CapacityExhausted`] when `index` is the last usable entry.
    pub fn next(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.last_index {
            return Err(PukaCuckooHashError::CapacityExhausted {
                capacity: CAPACITY_SCHEDULE[index.min(CAPACITY_SCHEDULE.len() - 1)],
                size_index: index,
            });
        }
        Ok((index + 1, CAPACITY_SCHEDULE[index + 1]))
    }
}

impl Default for CapacitySchedule {
    fn default() -> Self {
        Self::new()
    }
}

/// Eviction bound for a table of the given capacity: `steps_per_log2 * ceil(log2(capacity))`.
pub fn max_steps_for(capacity: usize, steps_per_log2: usize) -> usize {
    steps_per_log2 * ceil_log2(capacity).max(1)
}

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}
