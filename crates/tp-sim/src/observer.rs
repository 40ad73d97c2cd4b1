//! Simulation observer trait for progress reporting and data collection.

use tp_core::{BoothId, Tick};

use crate::{FinalStats, TickSnapshot, Vehicle};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
///         if snapshot.tick.0 % self.interval == 0 {
///             println!("{}: {} waiting", snapshot.tick, snapshot.queue_len);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per vehicle leaving a booth, with the finalized record.
    fn on_vehicle_completed(&mut self, _tick: Tick, _booth: BoothId, _vehicle: &Vehicle) {}

    /// Called at the end of each tick with the snapshot just appended to the
    /// history.
    fn on_tick_end(&mut self, _snapshot: &TickSnapshot) {}

    /// Called once after the final tick, with the run's statistics.
    fn on_sim_end(&mut self, _stats: &FinalStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
