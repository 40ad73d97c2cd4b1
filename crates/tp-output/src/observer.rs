//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tp_sim::{FinalStats, SimObserver, TickSnapshot};

use crate::row::{BoothUtilizationRow, TickHistoryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes the tick history and final utilization to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// History rows successfully written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
        let result = self.writer.write_tick(&TickHistoryRow::from(snapshot));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, stats: &FinalStats) {
        let rows: Vec<BoothUtilizationRow> =
            stats.booth_utilization.iter().map(BoothUtilizationRow::from).collect();
        let result = self.writer.write_utilization(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
