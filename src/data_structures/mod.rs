//! Data structures provided by the Puka Cuckoo crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types for every fallible operation
//! - Structured logging through `tracing` at decision points

pub mod puka_cuckoo_hash;

// Re-export common data structures
pub use puka_cuckoo_hash::{
    DeterministicCuckooHash, PukaCuckooHash, PukaCuckooHashConfig, PukaCuckooHashError,
    RandomizedCuckooHash, SlotLocation,
};
