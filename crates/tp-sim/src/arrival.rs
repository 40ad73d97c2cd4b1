//! Per-tick Bernoulli arrival generator.
//!
//! The arrival model is a deliberate simplification of a Poisson process:
//! every tick makes one trial with probability
//!
//!   p = 1 / (TICKS_PER_MINUTE / effective_rate)
//!
//! so at most one vehicle arrives per tick, and any rate at or above
//! `TICKS_PER_MINUTE` vehicles per minute arrives every tick.

use tp_core::{
    PaymentMethod, PlazaConfig, RandomSource, TICKS_PER_MINUTE, Tick, TrafficPattern, VehicleId,
};

use crate::Vehicle;

/// Turns the configured rate and traffic pattern into vehicles.
#[derive(Clone, Debug)]
pub struct ArrivalGenerator {
    nominal_rate:     f64,
    pattern:          TrafficPattern,
    /// Probability in [0, 1] that a new vehicle pays electronically.
    electronic_share: f64,
    duration_ticks:   u64,
    next_id:          VehicleId,
    generated:        u64,
}

impl ArrivalGenerator {
    pub fn new(config: &PlazaConfig) -> Self {
        Self {
            nominal_rate:     config.vehicles_per_minute,
            pattern:          config.traffic_pattern,
            electronic_share: config.electronic_percentage / 100.0,
            duration_ticks:   config.duration_ticks,
            next_id:          VehicleId::FIRST,
            generated:        0,
        }
    }

    /// Vehicles per minute in effect at `tick`.
    #[inline]
    pub fn effective_rate(&self, tick: Tick) -> f64 {
        self.pattern.effective_rate(self.nominal_rate, tick, self.duration_ticks)
    }

    /// Vehicles generated so far.
    #[inline]
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Make this tick's arrival trial at `rate` vehicles per minute.
    ///
    /// A non-positive rate draws nothing from `rng`.  On success the payment
    /// method comes from a second, independent draw.
    pub fn try_arrive<R: RandomSource>(
        &mut self,
        tick: Tick,
        rate: f64,
        rng:  &mut R,
    ) -> Option<Vehicle> {
        if rate <= 0.0 {
            return None;
        }
        if !rng.gen_bool(spawn_probability(rate)) {
            return None;
        }

        let payment = if rng.gen_bool(self.electronic_share) {
            PaymentMethod::Electronic
        } else {
            PaymentMethod::Cash
        };

        let id = self.next_id;
        self.next_id = id.next();
        self.generated += 1;
        Some(Vehicle::new(id, payment, tick))
    }
}

/// Per-tick arrival probability for a positive rate in vehicles per minute.
///
/// Not clamped; values above 1 mean "always".
#[inline]
pub fn spawn_probability(rate_per_minute: f64) -> f64 {
    1.0 / (TICKS_PER_MINUTE as f64 / rate_per_minute)
}
