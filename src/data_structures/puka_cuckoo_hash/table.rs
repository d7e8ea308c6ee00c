// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Puka Cuckoo Hash table.
//!
//! Keys live in one of two bucket arrays: at `hash_1(key)` in the first or at
//! `hash_2(key)` in the second. Inserting into an occupied slot evicts the occupant to
//! its slot in the other array, which may evict another key, and so on. Chains longer
//! than `max_steps` and inserts that push the load past the configured maximum make the
//! table grow to the next capacity in the schedule and rebuild.

use crate::data_structures::puka_cuckoo_hash::config::PukaCuckooHashConfig;
use crate::data_structures::puka_cuckoo_hash::error::Result;
use crate::data_structures::puka_cuckoo_hash::hash::{
    DeterministicHash, HashStrategy, RandomizedHash,
};
use crate::data_structures::puka_cuckoo_hash::schedule::{
    max_steps_for, CapacitySchedule, CAPACITY_SCHEDULE,
};
use crate::data_structures::puka_cuckoo_hash::slots::{Bucket, Buckets, SlotLocation};

/// Table using the fixed multiplicative hash functions.
pub type DeterministicCuckooHash = PukaCuckooHash<DeterministicHash>;

/// Table using universal hash functions redrawn on every rehash.
pub type RandomizedCuckooHash = PukaCuckooHash<RandomizedHash>;

/// Result of one eviction chain.
enum Placement {
    Placed,
    /// `max_steps` evictions happened; `orphan` is the key left without a slot.
    Aborted { orphan: i32 },
}

/// Runs the eviction chain for `key`, recording every slot written to `path`.
fn displace<S: HashStrategy>(
    buckets: &mut Buckets,
    hasher: &S,
    key: i32,
    max_steps: usize,
    path: &mut Vec<(Bucket, usize)>,
) -> Placement {
    let capacity = buckets.capacity();
    let mut carried = key;
    let mut bucket = Bucket::First;
    let mut index = hasher.hash_1(key, capacity);
    let mut steps = 0;

    loop {
        path.push((bucket, index));
        match buckets.slot_mut(bucket, index).replace(carried) {
            None => return Placement::Placed,
            Some(evicted) => {
                carried = evicted;
                steps += 1;
                if steps >= max_steps {
                    return Placement::Aborted { orphan: carried };
                }
                bucket = bucket.other();
                index = match bucket {
                    Bucket::First => hasher.hash_1(carried, capacity),
                    Bucket::Second => hasher.hash_2(carried, capacity),
                };
            }
        }
    }
}

/// Reverses the swaps recorded by [`displace`]. `carried` is the key still in flight
/// (the orphan of an aborted chain, `None` after a successful placement).
fn undo(buckets: &mut Buckets, path: &[(Bucket, usize)], mut carried: Option<i32>) {
    for &(bucket, index) in path.iter().rev() {
        std::mem::swap(buckets.slot_mut(bucket, index), &mut carried);
    }
}

/// A cuckoo hash set of `i32` keys with two bucket arrays.
///
/// The hash strategy is fixed by the type parameter. Mutating operations take
/// `&mut self`; share a table across threads behind a lock.
///
/// # Examples
///
/// ```
/// use puka_cuckoo::data_structures::puka_cuckoo_hash::{DeterministicCuckooHash, SlotLocation};
///
/// let mut table = DeterministicCuckooHash::new();
/// table.insert(1).unwrap();
/// table.insert(14).unwrap(); // same first-array slot as 1, so 1 moves over
///
/// assert_eq!(table.contains(14), SlotLocation::InBucket1);
/// assert_eq!(table.contains(1), SlotLocation::InBucket2);
/// assert_eq!(table.find(1), Some(1));
/// assert_eq!(table.capacity(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct PukaCuckooHash<S: HashStrategy = DeterministicHash> {
    buckets: Buckets,
    hasher: S,
    config: PukaCuckooHashConfig,
    schedule: CapacitySchedule,
    size_index: usize,
    max_steps: usize,
    size: usize,
    times_rehashed: usize,
}

impl<S: HashStrategy> PukaCuckooHash<S> {
    /// Creates an empty table at the smallest capacity.
    pub fn new() -> Self {
        let config = PukaCuckooHashConfig::default();
        let hasher = S::from_config(&config);
        Self::build(hasher, config, 0)
    }

    /// Creates an empty table starting at position `size_index` of the capacity schedule.
    ///
    /// # Errors
    ///
    /// `InvalidSizeIndex` if the schedule has no such position.
    pub fn with_size_index(size_index: usize) -> Result<Self> {
        Self::with_config(PukaCuckooHashConfig::new().with_initial_size_index(size_index))
    }

    /// Creates an empty table from a configuration.
    ///
    /// # Errors
    ///
    /// Any validation error of [`PukaCuckooHashConfig::validate`].
    pub fn with_config(config: PukaCuckooHashConfig) -> Result<Self> {
        config.validate()?;
        let hasher = S::from_config(&config);
        Self::with_strategy(hasher, config)
    }

    /// Creates an empty table using an already constructed hash strategy.
    ///
    /// # Errors
    ///
    /// Any validation error of [`PukaCuckooHashConfig::validate`].
    pub fn with_strategy(hasher: S, config: PukaCuckooHashConfig) -> Result<Self> {
        config.validate()?;
        let size_index = config.initial_size_index;
        Ok(Self::build(hasher, config, size_index))
    }

    /// Creates a table holding `keys`, equivalent to inserting them one by one.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` if the keys do not fit in the capacity schedule.
    pub fn from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut table = Self::new();
        for key in keys {
            table.insert(key)?;
        }
        Ok(table)
    }

    fn build(hasher: S, config: PukaCuckooHashConfig, size_index: usize) -> Self {
        let schedule = config.schedule();
        let capacity = CAPACITY_SCHEDULE[size_index];
        Self {
            buckets: Buckets::empty(capacity),
            max_steps: max_steps_for(capacity, config.steps_per_log2),
            hasher,
            config,
            schedule,
            size_index,
            size: 0,
            times_rehashed: 0,
        }
    }

    /// Inserts `key`. Inserting a key that is already stored changes nothing.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` when the table would have to grow past the end of its
    /// capacity schedule. The table is then left exactly as it was before the call.
    pub fn insert(&mut self, key: i32) -> Result<()> {
        if self.contains(key).is_found() {
            return Ok(());
        }

        let mut path = Vec::new();
        match displace(&mut self.buckets, &self.hasher, key, self.max_steps, &mut path) {
            Placement::Placed => {
                self.size += 1;
                if self.load_factor() > self.config.max_load_factor {
                    if let Err(err) = self.grow(None) {
                        undo(&mut self.buckets, &path, None);
                        self.size -= 1;
                        return Err(err);
                    }
                }
            }
            Placement::Aborted { orphan } => {
                tracing::trace!(
                    key,
                    orphan,
                    max_steps = self.max_steps,
                    capacity = self.buckets.capacity(),
                    "Eviction chain aborted"
                );
                if let Err(err) = self.grow(Some(orphan)) {
                    undo(&mut self.buckets, &path, Some(orphan));
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    /// Moves every stored key (plus `orphan`, if any) into fresh arrays at the next
    /// capacity that can hold them. Nothing is committed unless a rebuild succeeds.
    fn grow(&mut self, orphan: Option<i32>) -> Result<()> {
        let mut keys: Vec<i32> = self.buckets.keys().collect();
        keys.extend(orphan);

        let mut hasher = self.hasher.clone();
        let mut size_index = self.size_index;
        let mut attempts = 0;
        let mut scratch = Vec::new();

        'schedule: loop {
            let (next_index, capacity) = match self.schedule.next(size_index) {
                Ok(next) => next,
                Err(err) => {
                    tracing::warn!(
                        keys = keys.len(),
                        capacity = self.buckets.capacity(),
                        attempts,
                        "Capacity schedule exhausted, insert rejected"
                    );
                    return Err(err);
                }
            };
            size_index = next_index;
            attempts += 1;
            hasher.reseed();

            if keys.len() as f64 / (2 * capacity) as f64 > self.config.max_load_factor {
                continue;
            }

            let max_steps = max_steps_for(capacity, self.config.steps_per_log2);
            let mut buckets = Buckets::empty(capacity);
            for &key in &keys {
                scratch.clear();
                if let Placement::Aborted { orphan } =
                    displace(&mut buckets, &hasher, key, max_steps, &mut scratch)
                {
                    tracing::trace!(capacity, orphan, "Rebuild aborted, advancing capacity");
                    continue 'schedule;
                }
            }

            tracing::debug!(
                from = self.buckets.capacity(),
                to = capacity,
                keys = keys.len(),
                attempts,
                "Rehashed table"
            );
            self.buckets = buckets;
            self.hasher = hasher;
            self.size_index = size_index;
            self.max_steps = max_steps;
            self.size = keys.len();
            self.times_rehashed += attempts;
            return Ok(());
        }
    }

    /// Reports which bucket array holds `key`.
    pub fn contains(&self, key: i32) -> SlotLocation {
        if self.buckets.get(Bucket::First, self.get_hash_1(key)) == Some(key) {
            SlotLocation::InBucket1
        } else if self.buckets.get(Bucket::Second, self.get_hash_2(key)) == Some(key) {
            SlotLocation::InBucket2
        } else {
            SlotLocation::NotFound
        }
    }

    /// Returns the stored key equal to `key`, if any.
    pub fn find(&self, key: i32) -> Option<i32> {
        self.contains(key).is_found().then_some(key)
    }

    /// Removes `key`. Returns `false` if it was not stored.
    pub fn erase(&mut self, key: i32) -> bool {
        let (bucket, index) = match self.contains(key) {
            SlotLocation::InBucket1 => (Bucket::First, self.get_hash_1(key)),
            SlotLocation::InBucket2 => (Bucket::Second, self.get_hash_2(key)),
            SlotLocation::NotFound => return false,
        };
        *self.buckets.slot_mut(bucket, index) = None;
        self.size -= 1;
        true
    }

    /// Removes every key. The capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.size = 0;
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total slots across both bucket arrays.
    pub fn capacity(&self) -> usize {
        2 * self.buckets.capacity()
    }

    /// Stored keys divided by total slots.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Read-only view of the first bucket array.
    pub fn h1_bucket(&self) -> &[Option<i32>] {
        self.buckets.first()
    }

    /// Read-only view of the second bucket array.
    pub fn h2_bucket(&self) -> &[Option<i32>] {
        self.buckets.second()
    }

    /// Index of `key` in the first bucket array at the current capacity.
    pub fn get_hash_1(&self, key: i32) -> usize {
        self.hasher.hash_1(key, self.buckets.capacity())
    }

    /// Index of `key` in the second bucket array at the current capacity.
    pub fn get_hash_2(&self, key: i32) -> usize {
        self.hasher.hash_2(key, self.buckets.capacity())
    }

    /// Iterates stored keys, first array then second.
    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.buckets.keys()
    }

    /// Number of rebuild attempts performed so far.
    pub fn times_rehashed(&self) -> usize {
        self.times_rehashed
    }

    /// Current position in the capacity schedule.
    pub fn size_index(&self) -> usize {
        self.size_index
    }

    /// Current eviction-chain bound.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// The hash strategy in use.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// The configuration the table was built with.
    pub fn config(&self) -> &PukaCuckooHashConfig {
        &self.config
    }
}

impl<S: HashStrategy> Default for PukaCuckooHash<S> {
    fn default() -> Self {
        Self::new()
    }
}

// Tests module that verifies the behavior of the hash table
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::puka_cuckoo_hash::error::PukaCuckooHashError;

    fn layout(entries: &[(usize, i32)], capacity: usize) -> Vec<Option<i32>> {
        let mut slots = vec![None; capacity];
        for &(index, key) in entries {
            slots[index] = Some(key);
        }
        slots
    }

    fn assert_consistent<S: HashStrategy>(table: &PukaCuckooHash<S>) {
        assert_eq!(table.len(), table.buckets.occupied());
        for (index, slot) in table.h1_bucket().iter().enumerate() {
            if let Some(key) = slot {
                assert_eq!(table.get_hash_1(*key), index);
                assert_ne!(table.h2_bucket()[table.get_hash_2(*key)], Some(*key));
            }
        }
        for (index, slot) in table.h2_bucket().iter().enumerate() {
            if let Some(key) = slot {
                assert_eq!(table.get_hash_2(*key), index);
            }
        }
    }

    #[test]
    fn test_new_table() {
        let table = DeterministicCuckooHash::new();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 26);
        assert_eq!(table.max_steps(), 24);
        assert_eq!(table.h1_bucket().len(), 13);
        assert_eq!(table.h2_bucket().len(), 13);
    }

    #[test]
    fn test_insert_ten_keys_layout() {
        let table =
            DeterministicCuckooHash::from_keys([1, 34, 3, 23, 12, 39, 53, 45, 2, 11]).unwrap();

        assert_eq!(table.capacity(), 26);
        assert_eq!(table.times_rehashed(), 0);
        assert_eq!(
            table.h1_bucket(),
            layout(
                &[(0, 23), (1, 12), (2, 53), (3, 3), (7, 11), (8, 39), (9, 2), (11, 45), (12, 34)],
                13
            )
            .as_slice()
        );
        assert_eq!(table.h2_bucket(), layout(&[(10, 1)], 13).as_slice());
        assert_consistent(&table);
    }

    #[test]
    fn test_load_factor_growth_layout() {
        let values = [1, 34, 3, 23, 12, 38, 53, 45, 2, 11, 8, 5, 6, 43];
        let mut table = DeterministicCuckooHash::new();

        for (i, &value) in values.iter().enumerate() {
            assert_eq!(table.load_factor(), i as f64 / table.capacity() as f64);
            table.insert(value).unwrap();
            if i == 12 {
                assert_eq!(table.load_factor(), 0.5);
                assert_eq!(table.capacity(), 26);
            }
        }

        assert_eq!(table.capacity(), 58);
        assert_eq!(table.max_steps(), 30);
        assert_eq!(table.times_rehashed(), 1);
        assert_eq!(
            table.h1_bucket(),
            layout(
                &[
                    (3, 43),
                    (5, 6),
                    (6, 2),
                    (8, 23),
                    (11, 11),
                    (13, 3),
                    (15, 53),
                    (17, 45),
                    (18, 12),
                    (19, 8),
                    (26, 38),
                    (27, 34),
                    (28, 1)
                ],
                29
            )
            .as_slice()
        );
        assert_eq!(table.h2_bucket(), layout(&[(1, 5)], 29).as_slice());
    }

    #[test]
    fn test_aborted_chain_reinserts_orphan() {
        // 1, 14 and 27 share both slots at capacity 13, so the third insert cycles.
        let values = [1, 14, 27, 41, 54, 61, 81, 88];
        let table = DeterministicCuckooHash::from_keys(values).unwrap();

        assert_eq!(table.capacity(), 58);
        assert_eq!(table.len(), values.len());
        for value in values {
            assert!(table.contains(value).is_found(), "lost key {value}");
        }
        assert_consistent(&table);
    }

    #[test]
    fn test_exhausted_on_load_is_atomic() {
        let config = PukaCuckooHashConfig::new().with_max_size_index(0);
        let mut table = DeterministicCuckooHash::with_config(config).unwrap();
        for value in [1, 34, 3, 23, 12, 38, 53, 45, 2, 11, 8, 5, 6] {
            table.insert(value).unwrap();
        }
        let before = table.clone();

        assert_eq!(
            table.insert(43),
            Err(PukaCuckooHashError::CapacityExhausted {
                capacity: 13,
                size_index: 0
            })
        );
        assert_eq!(table.buckets, before.buckets);
        assert_eq!(table.len(), 13);
        assert_eq!(table.contains(43), SlotLocation::NotFound);
        assert_eq!(table.times_rehashed(), 0);
    }

    #[test]
    fn test_exhausted_on_abort_is_atomic() {
        let config = PukaCuckooHashConfig::new().with_max_size_index(0);
        let mut table = DeterministicCuckooHash::with_config(config).unwrap();
        table.insert(1).unwrap();
        table.insert(14).unwrap();
        let before = table.clone();

        assert!(matches!(
            table.insert(27),
            Err(PukaCuckooHashError::CapacityExhausted { .. })
        ));
        assert_eq!(table.buckets, before.buckets);
        assert_eq!(table.len(), 2);
        assert_eq!(table.contains(14), SlotLocation::InBucket1);
        assert_eq!(table.contains(1), SlotLocation::InBucket2);
        assert_eq!(table.find(27), None);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut table = DeterministicCuckooHash::new();
        table.insert(12).unwrap();
        let before = table.clone();

        table.insert(12).unwrap();
        assert_eq!(table.contains(12), SlotLocation::InBucket1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.buckets, before.buckets);
    }

    #[test]
    fn test_zero_and_negative_keys() {
        let mut table = DeterministicCuckooHash::new();
        assert_eq!(table.contains(0), SlotLocation::NotFound);

        table.insert(0).unwrap();
        table.insert(-12).unwrap();
        table.insert(i32::MIN).unwrap();

        assert_eq!(table.find(0), Some(0));
        assert_eq!(table.find(-12), Some(-12));
        assert_eq!(table.find(i32::MIN), Some(i32::MIN));
        assert_consistent(&table);
    }

    #[test]
    fn test_erase_and_clear() {
        let mut table = DeterministicCuckooHash::from_keys(0..100).unwrap();
        assert_eq!(table.len(), 100);
        let capacity = table.capacity();

        assert!(!table.erase(1_000));
        assert_eq!(table.len(), 100);

        for key in 0..50 {
            assert!(table.erase(key));
            assert!(!table.erase(key));
        }
        assert_eq!(table.len(), 50);
        assert_consistent(&table);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), capacity);
        assert_eq!(table.keys().count(), 0);
    }

    #[test]
    fn test_with_size_index() {
        let table = DeterministicCuckooHash::with_size_index(6).unwrap();
        assert_eq!(table.capacity(), 2 * 1109);
        assert_eq!(table.size_index(), 6);

        assert_eq!(
            DeterministicCuckooHash::with_size_index(27).unwrap_err(),
            PukaCuckooHashError::InvalidSizeIndex { index: 27, len: 27 }
        );
    }

    #[test]
    fn test_randomized_rehash_redraws_parameters() {
        let config = PukaCuckooHashConfig::new().with_hash_seed(5);
        let mut table = RandomizedCuckooHash::with_config(config).unwrap();
        let before = (table.hasher().first(), table.hasher().second());

        for key in 0..14 {
            table.insert(key).unwrap();
        }

        assert!(table.times_rehashed() >= 1);
        assert_ne!(before, (table.hasher().first(), table.hasher().second()));
        for key in 0..14 {
            assert_eq!(table.find(key), Some(key));
        }
        assert_consistent(&table);
    }
}
