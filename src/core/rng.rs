//! Deterministic random number generation for the Hare's fallback moves.
//!
//! When the oracle fails, the Hare plays a uniformly random legal move.
//! Seeding the RNG makes those fallbacks reproducible in tests.
//!
//! ```
//! use hare_hounds::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut same = GameRng::new(42);
//!
//! assert_eq!(rng.gen_range_usize(0..4), same.gen_range_usize(0..4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range. The range must not be
    /// empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
