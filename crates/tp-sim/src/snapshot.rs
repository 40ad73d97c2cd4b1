//! Per-tick history records.

use std::fmt;

use tp_core::{BoothId, PaymentMethod, Tick, VehicleId};

use crate::{BoothKind, BoothStatus, BoothStatusKind};

/// The single notable event reported for a tick.
///
/// When a tick has both an arrival and one or more completions, the arrival
/// is reported; otherwise the first completion in booth order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickEvent {
    Arrived {
        vehicle: VehicleId,
        payment: PaymentMethod,
    },
    Completed {
        booth:   BoothId,
        kind:    BoothKind,
        vehicle: VehicleId,
    },
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickEvent::Arrived { vehicle, payment } => {
                write!(f, "Vehicle {vehicle} ({payment}) joined the queue.")
            }
            TickEvent::Completed { booth, kind, vehicle } => {
                write!(f, "{kind}-{booth} finished serving vehicle {vehicle}.")
            }
        }
    }
}

/// Serialized as its display text.
#[cfg(feature = "serde")]
impl serde::Serialize for TickEvent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything recorded about one tick, taken after the assignment pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TickSnapshot {
    pub tick:            Tick,
    pub queue_len:       usize,
    /// One entry per booth, in construction order.
    pub booths:          Vec<BoothStatus>,
    /// Vehicles completed up to and including this tick.
    pub completed_total: usize,
    pub event:           Option<TickEvent>,
}

impl TickSnapshot {
    /// Number of booths serving a vehicle at the end of the tick.
    pub fn busy_booths(&self) -> usize {
        self.booths
            .iter()
            .filter(|b| b.status == BoothStatusKind::Busy)
            .count()
    }

    /// `true` if a vehicle arrived this tick.
    pub fn has_arrival(&self) -> bool {
        matches!(self.event, Some(TickEvent::Arrived { .. }))
    }
}
