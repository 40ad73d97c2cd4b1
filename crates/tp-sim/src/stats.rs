//! Post-run statistics.
//!
//! "Time in system" runs from arrival to service completion and so includes
//! the service duration itself, not just the wait in the queue.

use tp_core::BoothId;

use crate::{Booth, BoothKind, Vehicle};

/// Busy share of one booth over the whole configured duration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoothUtilization {
    pub id:          BoothId,
    pub kind:        BoothKind,
    pub busy_ticks:  u64,
    /// `busy_ticks / duration * 100`, two decimals; 0 when duration is 0.
    pub utilization: f64,
}

/// Summary of a run.  Vehicles still queued or in service are not counted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FinalStats {
    pub completed:           usize,
    /// Two decimals; 0 when nothing completed.
    pub avg_time_in_system:  f64,
    /// 0 when nothing completed.
    pub max_time_in_system:  u64,
    pub max_queue_len:       usize,
    /// One entry per booth, in construction order.
    pub booth_utilization:   Vec<BoothUtilization>,
}

impl FinalStats {
    pub fn compute(
        completed:      &[Vehicle],
        booths:         &[Booth],
        max_queue_len:  usize,
        duration_ticks: u64,
    ) -> Self {
        let times = completed.iter().filter_map(|v| v.time_in_system);
        let total: u64 = times.clone().sum();
        let max_time_in_system = times.max().unwrap_or(0);

        let avg_time_in_system = if completed.is_empty() {
            0.0
        } else {
            round2(total as f64 / completed.len() as f64)
        };

        let booth_utilization = booths
            .iter()
            .map(|b| BoothUtilization {
                id:          b.id,
                kind:        b.kind,
                busy_ticks:  b.busy_ticks(),
                utilization: if duration_ticks == 0 {
                    0.0
                } else {
                    round2(b.busy_ticks() as f64 / duration_ticks as f64 * 100.0)
                },
            })
            .collect();

        Self {
            completed: completed.len(),
            avg_time_in_system,
            max_time_in_system,
            max_queue_len,
            booth_utilization,
        }
    }
}

/// Round to two decimal places, ties to even (`3.125` becomes `3.12`).
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
