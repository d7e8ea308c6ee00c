// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Puka Cuckoo Hash table.

use serde::{Deserialize, Serialize};

use crate::data_structures::puka_cuckoo_hash::error::{PukaCuckooHashError, Result};
use crate::data_structures::puka_cuckoo_hash::schedule::{
    CapacitySchedule, CAPACITY_SCHEDULE, DEFAULT_STEPS_PER_LOG2,
};

/// Configuration for the Puka Cuckoo Hash table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PukaCuckooHashConfig {
    /// Position in the capacity schedule the table starts at.
    pub initial_size_index: usize,

    /// Last position in the capacity schedule the table may grow to.
    /// Growth past this point fails with `CapacityExhausted`.
    pub max_size_index: usize,

    /// Maximum load factor before triggering a resize.
    /// Load is measured over both bucket arrays.
    pub max_load_factor: f64,

    /// Multiplier applied to `ceil(log2(capacity))` to bound eviction chains.
    pub steps_per_log2: usize,

    /// Seed for the randomized hash strategy. `None` seeds from OS entropy.
    /// Ignored by the deterministic strategy.
    pub hash_seed: Option<u64>,
}

impl PukaCuckooHashConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `PukaCuckooHashConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the position in the capacity schedule the table starts at.
    ///
    /// # Arguments
    ///
    /// * `initial_size_index` - Index into the capacity schedule.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_size_index(mut self, initial_size_index: usize) -> Self {
        self.initial_size_index = initial_size_index;
        self
    }

    /// Caps growth at the given position in the capacity schedule.
    ///
    /// # Arguments
    ///
    /// * `max_size_index` - Last usable index; clamped to the schedule length.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_max_size_index(mut self, max_size_index: usize) -> Self {
        self.max_size_index = max_size_index.min(CAPACITY_SCHEDULE.len() - 1);
        self
    }

    /// Sets the maximum load factor before triggering a resize.
    ///
    /// # Arguments
    ///
    /// * `max_load_factor` - The maximum load factor (0.1 to 0.95).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor.clamp(0.1, 0.95);
        self
    }

    /// Sets the eviction bound multiplier.
    ///
    /// # Arguments
    ///
    /// * `steps_per_log2` - Evictions allowed per bit of capacity (at least 1).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_steps_per_log2(mut self, steps_per_log2: usize) -> Self {
        self.steps_per_log2 = steps_per_log2.max(1);
        self
    }

    /// Seeds the randomized hash strategy.
    pub fn with_hash_seed(mut self, seed: u64) -> Self {
        self.hash_seed = Some(seed);
        self
    }

    /// The capacity schedule these settings allow.
    pub fn schedule(&self) -> CapacitySchedule {
        CapacitySchedule::bounded(self.max_size_index)
    }

    /// Checks that the settings describe a usable table.
    ///
    /// # Errors
    ///
    /// [`PukaCuckooHashError::InvalidSizeIndex`] when the starting index is past the
    /// allowed schedule, [`PukaCuckooHashError::ConfigurationError`] for the rest.
    pub fn validate(&self) -> Result<()> {
        if self.max_size_index >= CAPACITY_SCHEDULE.len() {
            return Err(PukaCuckooHashError::ConfigurationError(format!(
                "max_size_index must be below {}",
                CAPACITY_SCHEDULE.len()
            )));
        }

        if self.initial_size_index > self.max_size_index {
            return Err(PukaCuckooHashError::InvalidSizeIndex {
                index: self.initial_size_index,
                len: self.max_size_index + 1,
            });
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor < 1.0) {
            return Err(PukaCuckooHashError::ConfigurationError(
                "max_load_factor must be between 0.0 and 1.0 exclusive".to_string(),
            ));
        }

        if self.steps_per_log2 == 0 {
            return Err(PukaCuckooHashError::ConfigurationError(
                "steps_per_log2 must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PukaCuckooHashConfig {
    fn default() -> Self {
        Self {
            initial_size_index: 0,                       // 13 slots per bucket
            max_size_index: CAPACITY_SCHEDULE.len() - 1, // whole schedule
            max_load_factor: 0.5,
            steps_per_log2: DEFAULT_STEPS_PER_LOG2,
            hash_seed: None,
        }
    }
}
