//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BoothUtilizationRow, OutputResult, TickHistoryRow};

/// Trait implemented by result writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one history row.
    fn write_tick(&mut self, row: &TickHistoryRow) -> OutputResult<()>;

    /// Write the utilization table, once, at the end of the run.
    fn write_utilization(&mut self, rows: &[BoothUtilizationRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
