// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash strategies for the Puka Cuckoo Hash table.
//!
//! Every strategy maps a key to one index in each of the two bucket arrays. The table is
//! generic over the strategy, so the choice is fixed when the table is built:
//!
//! - [`DeterministicHash`] uses two fixed multiplicative formulas. It is reproducible but
//!   a caller who knows the formulas can build key sequences that collide on purpose.
//! - [`RandomizedHash`] draws two members of the Carter-Wegman universal family
//!   `((a*k + b) mod p) mod m` and draws fresh ones whenever the table rehashes.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data_structures::puka_cuckoo_hash::config::PukaCuckooHashConfig;

/// Prime modulus of the universal family (`2^31 - 1`).
pub const MODULUS_P: u32 = 2_147_483_647;

/// A pair of hash functions mapping keys into the two bucket arrays.
pub trait HashStrategy: Clone + fmt::Debug {
    /// Builds the strategy described by `config`.
    fn from_config(config: &PukaCuckooHashConfig) -> Self;

    /// Index of `key` in the first bucket array, in `[0, capacity)`.
    fn hash_1(&self, key: i32, capacity: usize) -> usize;

    /// Index of `key` in the second bucket array, in `[0, capacity)`.
    fn hash_2(&self, key: i32, capacity: usize) -> usize;

    /// Called before every rebuild attempt. Stateless strategies keep the default no-op.
    fn reseed(&mut self) {}
}

/// Mathematical modulo: the result always lies in `[0, modulus)`, also for negative values.
pub(crate) fn real_modulo(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}

/// Fixed formulas `h1(k) = 7(k + 3) mod m` and `h2(k) = 5(k + 1) mod m`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeterministicHash;

impl DeterministicHash {
    /// Creates the deterministic strategy.
    pub fn new() -> Self {
        Self
    }
}

impl HashStrategy for DeterministicHash {
    fn from_config(_config: &PukaCuckooHashConfig) -> Self {
        Self
    }

    fn hash_1(&self, key: i32, capacity: usize) -> usize {
        real_modulo(7 * (i64::from(key) + 3), capacity as i64) as usize
    }

    fn hash_2(&self, key: i32, capacity: usize) -> usize {
        real_modulo(5 * (i64::from(key) + 1), capacity as i64) as usize
    }
}

/// Parameters `(a, b)` of one member of the universal family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalHash {
    /// Multiplier, drawn from `[1, p - 1]`
    pub a: u32,
    /// Offset, drawn from `[0, p - 1]`
    pub b: u32,
}

impl UniversalHash {
    fn draw<R: Rng>(rng: &mut R) -> Self {
        Self {
            a: rng.gen_range(1..MODULUS_P),
            b: rng.gen_range(0..MODULUS_P),
        }
    }

    /// Evaluates `((a*k + b) mod p) mod capacity`.
    ///
    /// `|a*k| < 2^62`, so the product never overflows an `i64`.
    pub fn index(&self, key: i32, capacity: usize) -> usize {
        let reduced = real_modulo(
            i64::from(self.a) * i64::from(key) + i64::from(self.b),
            i64::from(MODULUS_P),
        );
        reduced as usize % capacity
    }
}

impl fmt::Display for UniversalHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(({}k + {}) mod {}) mod m", self.a, self.b, MODULUS_P)
    }
}

/// Two independently drawn universal hash functions.
#[derive(Debug, Clone)]
pub struct RandomizedHash {
    first: UniversalHash,
    second: UniversalHash,
    rng: StdRng,
}

impl RandomizedHash {
    /// Creates a strategy seeded from the operating system's entropy source.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a strategy whose parameter draws are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let first = UniversalHash::draw(&mut rng);
        let second = UniversalHash::draw(&mut rng);
        let strategy = Self { first, second, rng };
        tracing::debug!(%strategy, "Drew universal hash parameters");
        strategy
    }

    /// Draws new parameters for both functions.
    pub fn regenerate(&mut self) {
        self.first = UniversalHash::draw(&mut self.rng);
        self.second = UniversalHash::draw(&mut self.rng);
        tracing::debug!(strategy = %self, "Drew universal hash parameters");
    }

    /// Parameters of the first hash function.
    pub fn first(&self) -> UniversalHash {
        self.first
    }

    /// Parameters of the second hash function.
    pub fn second(&self) -> UniversalHash {
        self.second
    }
}

impl Default for RandomizedHash {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RandomizedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h1 = {}, h2 = {}", self.first, self.second)
    }
}

impl HashStrategy for RandomizedHash {
    fn from_config(config: &PukaCuckooHashConfig) -> Self {
        match config.hash_seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn hash_1(&self, key: i32, capacity: usize) -> usize {
        self.first.index(key, capacity)
    }

    fn hash_2(&self, key: i32, capacity: usize) -> usize {
        self.second.index(key, capacity)
    }

    fn reseed(&mut self) {
        self.regenerate();
    }
}
