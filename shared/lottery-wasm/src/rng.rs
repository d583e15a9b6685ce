//! Random source for draws.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// A seedable RNG owned by the caller and handed to the sampler.
///
/// Can be seeded for deterministic replay, or created from system entropy.
#[derive(Debug, Clone)]
pub struct DrawRng {
    inner: SmallRng,
}

impl DrawRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for DrawRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for DrawRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}
