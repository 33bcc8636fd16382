//! Deterministic terrain RNG.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Callers
//! should pass `&mut rng.0` (or any other `rand::Rng`) into the generation
//! APIs instead of reaching for `rand::thread_rng()`, so that identical
//! seeds produce identical terrain.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG for all terrain randomness.
#[derive(Debug, Clone)]
pub struct TerrainRng(pub ChaCha8Rng);

impl Default for TerrainRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl TerrainRng {
    /// Create a new `TerrainRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
