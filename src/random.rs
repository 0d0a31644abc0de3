//! Randomness used by computer moves.
//!
//! Move selection only ever needs two things: a uniform index into a
//! collection and a shuffle. [`RandomSource`] captures that, so games can run
//! against a seeded [`GameRng`] in production and a [`ScriptedRng`] in tests.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Source of uniform random choices.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..len`.
    ///
    /// `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Returns an integer drawn uniformly from `min..=max`.
    fn gen_int(&mut self, min: usize, max: usize) -> usize {
        min + self.gen_index(max - min + 1)
    }

    /// Shuffles `items` in place (Fisher-Yates over [`RandomSource::gen_index`]).
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Seedable ChaCha8 generator.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates a generator with the given seed.
    #[must_use]
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from OS entropy.
    #[must_use]
    #[instrument]
    pub fn from_entropy() -> Self {
        let seed = OsRng.next_u64();
        debug!(seed, "Seeded game rng from entropy");
        Self::new(seed)
    }

    /// Returns the seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested length, so a script
/// never produces an out-of-range index. Useful for deterministic tests and
/// transcript replays.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Creates a scripted source. An empty script always yields `0`.
    #[instrument]
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn gen_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}
