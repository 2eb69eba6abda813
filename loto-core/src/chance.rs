//! Random source seam and the prefix shuffle.
//!
//! Every randomized operation (ticket grids, selling, ball order, jackpot
//! staging) draws from one [`RandomSource`], so a whole session replays
//! bit-for-bit from a seed.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Uniform integer source in `[0, bound)`.
///
/// A trait rather than a concrete PRNG so tests can script exact draw
/// sequences while production runs on a seeded ChaCha stream.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound == 0`.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Pseudorandom source backed by a small PRNG.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Reproducible source for a fixed seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Entropy-seeded source for non-reproducible runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn pick(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "pick bound must be positive");
        self.rng.gen_range(0..bound)
    }
}

/// Plays back a fixed script of values, for deterministic tests.
///
/// Each `pick` pops the next scripted value reduced modulo `bound`; an
/// exhausted script panics instead of cycling so a test that consumes more
/// randomness than expected fails loudly.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "pick bound must be positive");
        let value = self.values.pop_front().expect("scripted source exhausted");
        value % bound
    }
}

/// Shuffle the first `prefix` elements of `items` in place.
///
/// Inside-out scan: element `i` swaps with a uniform position in `0..=i`, so
/// after the pass the prefix is a uniform permutation of its elements while
/// `items[prefix..]` is never touched.
///
/// # Panics
/// Panics if `prefix > items.len()`.
pub fn shuffle_prefix<T, R: RandomSource + ?Sized>(items: &mut [T], prefix: usize, src: &mut R) {
    assert!(
        prefix <= items.len(),
        "shuffle prefix out of range: {} > {}",
        prefix,
        items.len()
    );
    for i in 0..prefix {
        let j = src.pick(i + 1);
        items.swap(i, j);
    }
}
