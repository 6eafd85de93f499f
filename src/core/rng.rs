//! Deterministic deck shuffling.
//!
//! A match owns one `ShuffleRng` seeded from `MatchConfig::seed`. Each
//! (re)initialization forks it, so a rematch deals different decks while
//! the whole sequence of matches stays reproducible from the seed.
//!
//! ```
//! use fusion_duel::core::ShuffleRng;
//!
//! let mut a = ShuffleRng::new(42);
//! let mut b = ShuffleRng::new(42);
//!
//! let mut x = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG with deterministic forking.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl ShuffleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent RNG. Successive forks differ; the same fork
    /// index from the same seed is always identical.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
