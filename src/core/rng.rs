//! Seeded randomness for computer players.
//!
//! Each computer side draws from its own ChaCha8 stream, derived from the
//! game seed and a side label. Seed derivation uses fixed functions only
//! (`FxHasher` and a golden-ratio step), so a seed replays the same game
//! on every platform and toolchain.
//!
//! ```
//! use fox_geese::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut geese = root.for_context("geese");
//! let mut again = GameRng::new(42).for_context("geese");
//!
//! let cells = [10, 20, 30];
//! assert_eq!(geese.choose(&cells), again.choose(&cells));
//! ```

use std::hash::Hasher;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random stream with a known seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed drawn from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next seed in a deterministic sequence of child streams, e.g. one
    /// per game of a match.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(GOLDEN_GAMMA)))
    }

    /// Stream for a named context, independent of the parent's draws.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        Self::new(hasher.finish())
    }

    /// Uniform pick from `items`, `None` if empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
