//! Test modules for the Puka Cuckoo crate.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Property-based tests of the table against a `HashSet` model
//! - Table-driven tests of the hash strategies and capacity schedule
//! - Configuration loading tests backed by temporary files
//! - Shared fixtures and strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, operations_strategy, Operation, TestFixture};
