//! Plain data row types written by output backends.

use tp_sim::{BoothUtilization, TickSnapshot};

/// One line of the per-tick history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickHistoryRow {
    pub tick:            u64,
    pub queue_len:       u64,
    pub busy_booths:     u64,
    pub completed_total: u64,
    /// Event text, empty when nothing notable happened.
    pub event:           String,
}

impl From<&TickSnapshot> for TickHistoryRow {
    fn from(s: &TickSnapshot) -> Self {
        Self {
            tick:            s.tick.0,
            queue_len:       s.queue_len as u64,
            busy_booths:     s.busy_booths() as u64,
            completed_total: s.completed_total as u64,
            event:           s.event.map(|e| e.to_string()).unwrap_or_default(),
        }
    }
}

/// Final busy share of one booth.
#[derive(Debug, Clone, PartialEq)]
pub struct BoothUtilizationRow {
    /// Booth label, e.g. `MANUAL-3`.
    pub booth:           String,
    pub kind:            &'static str,
    pub busy_ticks:      u64,
    pub utilization_pct: f64,
}

impl From<&BoothUtilization> for BoothUtilizationRow {
    fn from(u: &BoothUtilization) -> Self {
        Self {
            booth:           format!("{}-{}", u.kind, u.id),
            kind:            u.kind.as_str(),
            busy_ticks:      u.busy_ticks,
            utilization_pct: u.utilization,
        }
    }
}
