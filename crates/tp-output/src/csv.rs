//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_history.csv`
//! - `booth_utilization.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BoothUtilizationRow, OutputResult, TickHistoryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    history:     Writer<File>,
    utilization: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut history = Writer::from_path(dir.join("tick_history.csv"))?;
        history.write_record(["tick", "queue_len", "busy_booths", "completed_total", "event"])?;

        let mut utilization = Writer::from_path(dir.join("booth_utilization.csv"))?;
        utilization.write_record(["booth", "kind", "busy_ticks", "utilization_pct"])?;

        Ok(Self {
            history,
            utilization,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick(&mut self, row: &TickHistoryRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.tick.to_string(),
            row.queue_len.to_string(),
            row.busy_booths.to_string(),
            row.completed_total.to_string(),
            row.event.clone(),
        ])?;
        Ok(())
    }

    fn write_utilization(&mut self, rows: &[BoothUtilizationRow]) -> OutputResult<()> {
        for row in rows {
            self.utilization.write_record(&[
                row.booth.clone(),
                row.kind.to_owned(),
                row.busy_ticks.to_string(),
                format!("{:.2}", row.utilization_pct),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.utilization.flush()?;
        Ok(())
    }
}
