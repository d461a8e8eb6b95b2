//! Injectable randomness for guess selection
//!
//! The engine makes exactly two randomized choices: sampling the opening
//! guess from the ranked pool, and sampling later guesses from the remaining
//! candidates. Both go through [`Selection`] so callers can seed the source
//! or switch to deterministic picks for reproducible runs.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Source of guess choices
#[derive(Debug, Clone)]
pub enum Selection {
    /// Always pick the first element (rank order / candidate order)
    Deterministic,
    /// Pick uniformly at random
    Random(StdRng),
}

impl Selection {
    /// Randomized selection seeded from OS entropy
    #[must_use]
    pub fn sampled() -> Self {
        Self::Random(StdRng::from_os_rng())
    }

    /// Randomized selection with a fixed seed, for reproducible runs
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Random(StdRng::seed_from_u64(seed))
    }

    /// Deterministic selection: the first element wins
    #[must_use]
    pub const fn deterministic() -> Self {
        Self::Deterministic
    }

    /// Choose one element from a pool
    ///
    /// Returns `None` for an empty pool.
    pub fn choose<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        match self {
            Self::Deterministic => pool.first(),
            Self::Random(rng) => pool.choose(rng),
        }
    }
}
