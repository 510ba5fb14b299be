//! Entropy-backed random source for live play.

use battle_core::RngOracle;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// [`RngOracle`] over `rand`'s standard generator.
///
/// Seeded from OS entropy for normal play, or from a fixed seed to replay an
/// opponent's picks.
pub struct EntropyRng(StdRng);

impl EntropyRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RngOracle for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}
