//! Injectable randomness for the simulation.
//!
//! # Determinism strategy
//!
//! Every random decision in a run (arrival trial, payment coin flip, manual
//! service duration, booth shuffle order) is drawn from one [`RandomSource`]
//! owned by the simulation.  The production source is [`SimRng`], a
//! `SmallRng` seeded from a single `u64`:
//!
//! - The same seed and the same configuration always reproduce the same
//!   history and statistics.
//! - Tests can substitute a scripted source to force outcomes (always arrive,
//!   always electronic, identity shuffle) without touching the engine.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The source of every random draw made by the simulation.
///
/// Implementations must be deterministic for a given internal state; the
/// simulation never reaches for ambient global randomness.
pub trait RandomSource {
    /// `true` with probability `p`.  Values outside [0, 1] are clamped.
    fn gen_bool(&mut self, p: f64) -> bool;

    /// A uniformly distributed integer in `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn gen_range_inclusive(&mut self, low: u64, high: u64) -> u64;

    /// Shuffle a mutable slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seedable simulation-level RNG.
///
/// Used only in single-threaded contexts; one instance drives a whole run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for runs where reproducibility is not needed.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    fn gen_range_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.0.gen_range(low..=high)
    }

    /// Fisher-Yates.
    #[inline]
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
