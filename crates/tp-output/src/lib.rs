//! `tp-output`: result writers and scenario storage for the toll plaza
//! simulator.
//!
//! | Item                  | Files created                                       |
//! |-----------------------|-----------------------------------------------------|
//! | [`CsvWriter`]         | `tick_history.csv`, `booth_utilization.csv`         |
//! | [`ScenarioStore`]     | one JSON array of named configurations              |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `tp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tp_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let outcome = sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod scenario;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{BoothUtilizationRow, TickHistoryRow};
pub use scenario::{ScenarioRecord, ScenarioStore};
pub use writer::OutputWriter;
