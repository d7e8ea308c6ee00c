// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket storage for the Puka Cuckoo Hash table.
//!
//! Slots are `Option<i32>`, so every `i32` (including `0`) is a storable key.

/// One of the two bucket arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bucket {
    First,
    Second,
}

impl Bucket {
    pub(crate) fn other(self) -> Self {
        match self {
            Bucket::First => Bucket::Second,
            Bucket::Second => Bucket::First,
        }
    }
}

/// Where a key is stored, as reported by `PukaCuckooHash::contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotLocation {
    /// At `hash_1(key)` in the first bucket array
    InBucket1,
    /// At `hash_2(key)` in the second bucket array
    InBucket2,
    /// Not stored
    NotFound,
}

impl SlotLocation {
    /// Numeric form used in diagnostics: `1`, `2`, or `-1` when absent.
    pub fn code(self) -> i32 {
        match self {
            SlotLocation::InBucket1 => 1,
            SlotLocation::InBucket2 => 2,
            SlotLocation::NotFound => -1,
        }
    }

    /// Whether the key is stored in either bucket.
    pub fn is_found(self) -> bool {
        self != SlotLocation::NotFound
    }
}

/// The two equally sized bucket arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Buckets {
    slot1: Vec<Option<i32>>,
    slot2: Vec<Option<i32>>,
}

impl Buckets {
    pub(crate) fn empty(capacity: usize) -> Self {
        Self {
            slot1: vec![None; capacity],
            slot2: vec![None; capacity],
        }
    }

    /// Slots per array.
    pub(crate) fn capacity(&self) -> usize {
        self.slot1.len()
    }

    pub(crate) fn get(&self, bucket: Bucket, index: usize) -> Option<i32> {
        match bucket {
            Bucket::First => self.slot1[index],
            Bucket::Second => self.slot2[index],
        }
    }

    pub(crate) fn slot_mut(&mut self, bucket: Bucket, index: usize) -> &mut Option<i32> {
        match bucket {
            Bucket::First => &mut self.slot1[index],
            Bucket::Second => &mut self.slot2[index],
        }
    }

    pub(crate) fn first(&self) -> &[Option<i32>] {
        &self.slot1
    }

    pub(crate) fn second(&self) -> &[Option<i32>] {
        &self.slot2
    }

    /// Stored keys, first array then second, each in index order.
    pub(crate) fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.slot1.iter().chain(self.slot2.iter()).flatten().copied()
    }

    pub(crate) fn occupied(&self) -> usize {
        self.keys().count()
    }

    pub(crate) fn clear(&mut self) {
        self.slot1.fill(None);
        self.slot2.fill(None);
    }
}
