// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Puka Cuckoo Hash: a two-array cuckoo hash set for integer keys.
//!
//! Every key has exactly two candidate slots, one per bucket array, so lookups and
//! deletions probe at most two positions. Insertion may evict occupants along a bounded
//! chain; when the chain runs too long or the load passes the configured maximum, the
//! table grows through a fixed schedule of prime capacities and rebuilds.
//!
//! # Features
//!
//! - Two interchangeable hash strategies selected by type: fixed multiplicative
//!   formulas ([`DeterministicHash`]) or a universal family redrawn on every rehash
//!   ([`RandomizedHash`])
//! - Explicit `Option` slots, so `0` and negative keys are ordinary keys
//! - All-or-nothing growth: a failed insert leaves the table untouched
//! - Zero unsafe code
//!
//! # Example
//!
//! ```
//! use puka_cuckoo::data_structures::puka_cuckoo_hash::{
//!     DeterministicCuckooHash, PukaCuckooHashConfig, RandomizedCuckooHash, SlotLocation,
//! };
//!
//! let mut table = DeterministicCuckooHash::new();
//! table.insert(42).unwrap();
//! table.insert(42).unwrap(); // duplicates are ignored
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.find(42), Some(42));
//! assert_eq!(table.contains(7), SlotLocation::NotFound);
//! assert!(table.erase(42));
//!
//! // Reproducible randomized table
//! let config = PukaCuckooHashConfig::new().with_hash_seed(1_388_210_758);
//! let mut randomized = RandomizedCuckooHash::with_config(config).unwrap();
//! randomized.insert(-5).unwrap();
//! assert!(randomized.contains(-5).is_found());
//! ```
//!
//! # Growth
//!
//! ```
//! use puka_cuckoo::data_structures::puka_cuckoo_hash::{
//!     DeterministicCuckooHash, PukaCuckooHashConfig, PukaCuckooHashError,
//! };
//!
//! // Allow only the smallest capacity (13 slots per array).
//! let config = PukaCuckooHashConfig::new().with_max_size_index(0);
//! let mut table = DeterministicCuckooHash::with_config(config).unwrap();
//! for key in 0..13 {
//!     table.insert(key).unwrap();
//! }
//!
//! let err = table.insert(13).unwrap_err();
//! assert!(matches!(err, PukaCuckooHashError::CapacityExhausted { .. }));
//! assert_eq!(table.len(), 13);
//! ```

// Module declarations
mod config;
mod error;
mod hash;
mod schedule;
mod slots;
mod table;

// Re-exports
pub use config::PukaCuckooHashConfig;
pub use error::{PukaCuckooHashError, Result};
pub use hash::{DeterministicHash, HashStrategy, RandomizedHash, UniversalHash, MODULUS_P};
pub use schedule::{max_steps_for, CapacitySchedule, CAPACITY_SCHEDULE, DEFAULT_STEPS_PER_LOG2};
pub use slots::SlotLocation;
pub use table::{DeterministicCuckooHash, PukaCuckooHash, RandomizedCuckooHash};
