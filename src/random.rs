//! Random source used to pick an unseen title.
//!
//! Production seeds a PCG generator from the wall clock; tests seed it with
//! a constant so picks are repeatable.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform index picker.
pub trait RandomSource {
    /// Index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Generator seeded from the current time.
pub fn wall_clock_rng() -> Pcg32 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    Pcg32::seed_from_u64(seed)
}
