// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Puka Cuckoo Hash table.

/// Error types for Puka Cuckoo Hash operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PukaCuckooHashError {
    /// Growth was required but the capacity schedule has no further entry.
    /// The table is left exactly as it was before the failing operation.
    #[error("Capacity schedule exhausted at {capacity} slots per bucket (size index {size_index})")]
    CapacityExhausted {
        /// Slots per bucket array when growth failed
        capacity: usize,
        /// Position in the capacity schedule when growth failed
        size_index: usize,
    },

    /// The requested starting position is outside the capacity schedule
    #[error("Size index {index} is outside the capacity schedule ({len} entries)")]
    InvalidSizeIndex {
        /// The requested index
        index: usize,
        /// Number of usable schedule entries
        len: usize,
    },

    /// Configuration error
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for Puka Cuckoo Hash operations
pub type Result<T> = std::result::Result<T, PukaCuckooHashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PukaCuckooHashError::CapacityExhausted {
            capacity: 13,
            size_index: 0,
        };
        assert_eq!(
            err.to_string(),
            "Capacity schedule exhausted at 13 slots per bucket (size index 0)"
        );

        let err = PukaCuckooHashError::InvalidSizeIndex { index: 40, len: 27 };
        assert_eq!(
            err.to_string(),
            "Size index 40 is outside the capacity schedule (27 entries)"
        );
    }
}
