//! The passive vehicle record.

use tp_core::{PaymentMethod, Tick, VehicleId};

/// One car passing through the plaza.
///
/// A vehicle is plain data and `Copy`: snapshots hold copies, never
/// references into live simulation state.  `time_in_system` stays `None`
/// until the vehicle leaves its booth; after that the record is final.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Vehicle {
    pub id:             VehicleId,
    pub payment:        PaymentMethod,
    pub arrived_at:     Tick,
    /// Completion tick minus arrival tick, including service time.
    pub time_in_system: Option<u64>,
}

impl Vehicle {
    pub fn new(id: VehicleId, payment: PaymentMethod, arrived_at: Tick) -> Self {
        Self { id, payment, arrived_at, time_in_system: None }
    }

    /// Consume the in-flight record and return the final one, completed at
    /// `now`.
    ///
    /// # Panics
    /// Panics in debug mode if the vehicle is already finalized or `now`
    /// precedes its arrival.
    pub fn finalized(self, now: Tick) -> Vehicle {
        debug_assert!(!self.is_finalized(), "vehicle {} finalized twice", self.id);
        Vehicle {
            time_in_system: Some(now.since(self.arrived_at)),
            ..self
        }
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.time_in_system.is_some()
    }
}
