//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! simulated second, so arrival rates quoted per minute are converted with
//! [`TICKS_PER_MINUTE`]:
//!
//!   per_tick_probability = 1 / (TICKS_PER_MINUTE / vehicles_per_minute)
//!
//! Using an integer tick as the canonical time unit keeps service-completion
//! arithmetic exact and comparisons O(1).

use std::fmt;

/// Ticks in one simulated minute.
pub const TICKS_PER_MINUTE: u64 = 60;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The run's clock: the current tick and the exclusive end tick.
#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Exclusive upper bound; the run performs exactly `end_tick.0` iterations.
    pub end_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 that ends after `duration_ticks` ticks.
    pub fn new(duration_ticks: u64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            end_tick:     Tick(duration_ticks),
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// `true` once every tick of the run has been processed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.end_tick
    }

    /// Ticks still to run.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end_tick.0.saturating_sub(self.current_tick.0)
    }

    /// Break elapsed time into (minute, second) components from tick 0.
    pub fn elapsed_ms(&self) -> (u64, u64) {
        let t = self.current_tick.0;
        (t / TICKS_PER_MINUTE, t % TICKS_PER_MINUTE)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} ({:02}:{:02})", self.current_tick, m, s)
    }
}
