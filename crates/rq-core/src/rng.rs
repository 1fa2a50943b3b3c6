//! Deterministic RNG wrapper for training runs.
//!
//! # Determinism strategy
//!
//! Each trainer instance gets its own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream numbers uniformly across the seed space.
//! Running Q-learning (stream 0) and SARSA (stream 1) back to back against
//! the same graph therefore never correlates their exploration draws, and a
//! whole comparison run is reproducible from a single `u64` seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-trainer deterministic RNG.
///
/// Each trainer owns its own stream outright, matching the
/// one-table-per-trainer ownership rule; nothing here is shared.
pub struct TrainRng(SmallRng);

impl TrainRng {
    /// Seed deterministically from the run's global seed and a stream number.
    pub fn new(run_seed: u64, stream: u64) -> Self {
        let seed = run_seed ^ stream.wrapping_mul(MIXING_CONSTANT);
        TrainRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
