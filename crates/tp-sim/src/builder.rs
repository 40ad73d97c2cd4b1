//! Fluent builder for constructing a [`Sim`].

use std::ops::RangeInclusive;

use tp_core::{PlazaConfig, RandomSource, RawPlazaConfig};

use crate::booth::build_booths;
use crate::{ArrivalGenerator, ServiceTimes, Sim, SimError, SimResult, VehicleQueue};

/// Upper bound on any service duration override, in ticks.
///
/// Keeps `now + duration` well inside `u64` for every reachable tick.
pub const MAX_SERVICE_TICKS: u64 = u32::MAX as u64;

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`PlazaConfig`]: booth counts, duration, arrival rate, payment mix,
///   traffic pattern
/// - `R: RandomSource`: the run's only source of randomness (e.g.
///   [`tp_core::SimRng`])
///
/// # Optional inputs (have defaults)
///
/// | Method                          | Default    |
/// |---------------------------------|------------|
/// | `.automatic_service_ticks(n)`   | `3`        |
/// | `.manual_service_range(r)`      | `7..=12`   |
///
/// # Example
///
/// ```rust,ignore
/// let config = PlazaConfig::from_path(Path::new("plaza.json"))?;
/// let outcome = SimBuilder::new(config, SimRng::new(42))
///     .build()?
///     .run(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: RandomSource> {
    config:        PlazaConfig,
    rng:           R,
    service_times: ServiceTimes,
}

impl<R: RandomSource> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: PlazaConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            service_times: ServiceTimes::default(),
        }
    }

    /// Validate a raw configuration and create a builder from it.
    pub fn from_raw(raw: RawPlazaConfig, rng: R) -> SimResult<Self> {
        Ok(Self::new(PlazaConfig::try_from(raw)?, rng))
    }

    /// Fixed service duration at automatic booths.  Must be at least 1.
    pub fn automatic_service_ticks(mut self, ticks: u64) -> Self {
        self.service_times.automatic_ticks = ticks;
        self
    }

    /// Inclusive range of the manual service duration draw.  Both bounds must
    /// be at least 1 and the range non-empty.
    pub fn manual_service_range(mut self, range: RangeInclusive<u64>) -> Self {
        self.service_times.manual_min = *range.start();
        self.service_times.manual_max = *range.end();
        self
    }

    /// Validate inputs, build the booths, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R>> {
        let t = self.service_times;
        if t.automatic_ticks == 0 {
            return Err(SimError::ServiceTimes(
                "automatic service must take at least one tick".into(),
            ));
        }
        if t.automatic_ticks > MAX_SERVICE_TICKS || t.manual_max > MAX_SERVICE_TICKS {
            return Err(SimError::ServiceTimes(format!(
                "service durations must not exceed {MAX_SERVICE_TICKS} ticks",
            )));
        }
        if t.manual_min == 0 || t.manual_min > t.manual_max {
            return Err(SimError::ServiceTimes(format!(
                "manual service range {}..={} must be non-empty and start at 1 or more",
                t.manual_min, t.manual_max,
            )));
        }

        let booths = build_booths(self.config.automatic_booths, self.config.manual_booths);
        let history = Vec::with_capacity(self.config.duration_ticks.min(1 << 16) as usize);

        Ok(Sim {
            clock:         tp_core::SimClock::new(self.config.duration_ticks),
            arrivals:      ArrivalGenerator::new(&self.config),
            config:        self.config,
            booths,
            queue:         VehicleQueue::new(),
            completed:     Vec::new(),
            history,
            max_queue_len: 0,
            service_times: t,
            rng:           self.rng,
        })
    }
}
