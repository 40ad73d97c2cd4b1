//! The `Sim` struct and its tick loop.

use log::{debug, info};
use tp_core::{PlazaConfig, RandomSource, SimClock, Tick};

use crate::assignment::assign_free_booths;
use crate::{
    ArrivalGenerator, Booth, FinalStats, ServiceTimes, SimObserver, TickEvent, TickSnapshot,
    Vehicle, VehicleQueue,
};

/// History and statistics of a finished run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimOutcome {
    pub history: Vec<TickSnapshot>,
    pub stats:   FinalStats,
}

/// The main simulation runner.
///
/// `Sim<R>` owns all run state and drives the tick loop:
///
/// 1. **Arrival**: one Bernoulli trial at the tick's effective rate; a new
///    vehicle joins the back of the queue.
/// 2. **Completion**: every booth advances in construction order; vehicles
///    whose service ends are finalized into the completed collection.
/// 3. **Assignment**: free booths, in random order, take the earliest
///    vehicle they can serve.
/// 4. **Record**: the running maximum queue length is updated and a
///    snapshot is appended to the history.
///
/// Every vehicle generated is at all times in exactly one of the queue, a
/// booth, or the completed collection.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource> {
    pub(crate) config:        PlazaConfig,
    pub(crate) clock:         SimClock,
    pub(crate) booths:        Vec<Booth>,
    pub(crate) queue:         VehicleQueue,
    pub(crate) completed:     Vec<Vehicle>,
    pub(crate) history:       Vec<TickSnapshot>,
    pub(crate) max_queue_len: usize,
    pub(crate) arrivals:      ArrivalGenerator,
    pub(crate) service_times: ServiceTimes,
    pub(crate) rng:           R,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run every remaining tick, then compute statistics.
    ///
    /// Vehicles still queued or in service at the end are left out of the
    /// statistics; the loop never waits for them.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimOutcome {
        self.run_ticks(self.clock.remaining(), observer);
        let stats = self.stats();
        info!(
            "run finished after {} ticks: {} completed, avg time in system {}, max queue {}",
            self.config.duration_ticks,
            stats.completed,
            stats.avg_time_in_system,
            stats.max_queue_len,
        );
        observer.on_sim_end(&stats);
        SimOutcome { history: self.history, stats }
    }

    /// Run up to `n` ticks from the current position, stopping early at the
    /// end of the run.  Returns the number of ticks processed.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut done = 0;
        while done < n && self.step(observer).is_some() {
            done += 1;
        }
        done
    }

    /// Process exactly one tick and return its snapshot, or `None` if the
    /// run is already over.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<&TickSnapshot> {
        if self.clock.is_finished() {
            return None;
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let snapshot = self.process_tick(now, observer);
        observer.on_tick_end(&snapshot);
        self.history.push(snapshot);
        self.clock.advance();
        self.history.last()
    }

    /// Statistics over everything completed so far.  Utilization is always
    /// relative to the configured duration.
    pub fn stats(&self) -> FinalStats {
        FinalStats::compute(
            &self.completed,
            &self.booths,
            self.max_queue_len,
            self.config.duration_ticks,
        )
    }

    // ── Read-only views ───────────────────────────────────────────────────

    pub fn config(&self) -> &PlazaConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn booths(&self) -> &[Booth] {
        &self.booths
    }

    pub fn queue(&self) -> &VehicleQueue {
        &self.queue
    }

    pub fn completed(&self) -> &[Vehicle] {
        &self.completed
    }

    pub fn history(&self) -> &[TickSnapshot] {
        &self.history
    }

    /// Vehicles generated so far.
    pub fn generated(&self) -> u64 {
        self.arrivals.generated()
    }

    /// Vehicles currently attached to a booth.
    pub fn in_service(&self) -> usize {
        self.booths.iter().filter(|b| !b.is_free()).count()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> TickSnapshot {
        // ── Phase 1: arrival ──────────────────────────────────────────────
        let rate = self.arrivals.effective_rate(now);
        let mut event = None;
        if let Some(vehicle) = self.arrivals.try_arrive(now, rate, &mut self.rng) {
            debug!("{now}: vehicle {} ({}) arrives", vehicle.id, vehicle.payment);
            event = Some(TickEvent::Arrived { vehicle: vehicle.id, payment: vehicle.payment });
            self.queue.push_back(vehicle);
        }

        // ── Phase 2: service completions ──────────────────────────────────
        for booth in &mut self.booths {
            let Some(vehicle) = booth.advance(now) else {
                continue;
            };
            let done = vehicle.finalized(now);
            debug!(
                "{now}: {} releases vehicle {} after {} ticks in system",
                booth.label(),
                done.id,
                done.time_in_system.unwrap_or(0),
            );
            observer.on_vehicle_completed(now, booth.id, &done);
            event.get_or_insert(TickEvent::Completed {
                booth:   booth.id,
                kind:    booth.kind,
                vehicle: done.id,
            });
            self.completed.push(done);
        }

        // ── Phase 3: assignment ───────────────────────────────────────────
        assign_free_booths(
            &mut self.booths,
            &mut self.queue,
            now,
            &self.service_times,
            &mut self.rng,
        );

        // ── Phase 4: record ───────────────────────────────────────────────
        self.max_queue_len = self.max_queue_len.max(self.queue.len());

        TickSnapshot {
            tick:            now,
            queue_len:       self.queue.len(),
            booths:          self.booths.iter().map(Booth::status).collect(),
            completed_total: self.completed.len(),
            event,
        }
    }
}
