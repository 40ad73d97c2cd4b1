//! Booths: the two service-point variants and their Free/Busy state machine.
//!
//! # State machine
//!
//! ```text
//!            begin_service(v, now)
//!   Free ───────────────────────────▶ Busy { v, completes_at = now + d }
//!    ▲                                   │
//!    └──────── advance(t), t ≥ completes_at ┘  (yields v)
//! ```
//!
//! While Busy, every call to [`Booth::advance`] adds one to the busy-tick
//! counter, including the call that frees the booth.

use std::fmt;

use tp_core::{BoothId, PaymentMethod, RandomSource, Tick};

use crate::Vehicle;

// ── BoothKind ─────────────────────────────────────────────────────────────────

/// The closed set of booth variants.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoothKind {
    /// Fast, reads electronic tags only, fixed service time.
    Automatic,
    /// Slow, staffed, accepts any payment, random service time.
    Manual,
}

impl BoothKind {
    /// Capability predicate.
    #[inline]
    pub fn can_serve(self, payment: PaymentMethod) -> bool {
        match self {
            BoothKind::Automatic => payment == PaymentMethod::Electronic,
            BoothKind::Manual    => true,
        }
    }

    /// Label prefix used in booth names and event text.
    pub fn as_str(self) -> &'static str {
        match self {
            BoothKind::Automatic => "AUTO",
            BoothKind::Manual    => "MANUAL",
        }
    }
}

impl fmt::Display for BoothKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ServiceTimes ──────────────────────────────────────────────────────────────

/// Service duration policy for both booth kinds, in ticks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ServiceTimes {
    /// Fixed duration at an automatic booth.
    pub automatic_ticks: u64,
    /// Inclusive lower bound of the manual duration draw.
    pub manual_min:      u64,
    /// Inclusive upper bound of the manual duration draw.
    pub manual_max:      u64,
}

impl Default for ServiceTimes {
    fn default() -> Self {
        Self { automatic_ticks: 3, manual_min: 7, manual_max: 12 }
    }
}

impl ServiceTimes {
    /// Duration for one vehicle at a booth of `kind`.  Manual booths make one
    /// independent draw per call.
    pub fn draw<R: RandomSource>(&self, kind: BoothKind, rng: &mut R) -> u64 {
        match kind {
            BoothKind::Automatic => self.automatic_ticks,
            BoothKind::Manual    => rng.gen_range_inclusive(self.manual_min, self.manual_max),
        }
    }
}

// ── Booth ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum BoothState {
    Free,
    Busy { vehicle: Vehicle, completes_at: Tick },
}

/// Free/Busy as reported in snapshots.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoothStatusKind {
    Free,
    Busy,
}

/// A plain copy of one booth's state at the end of a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoothStatus {
    pub id:      BoothId,
    pub kind:    BoothKind,
    pub status:  BoothStatusKind,
    /// The vehicle in service; `None` whenever `status` is `Free`.
    pub serving: Option<Vehicle>,
}

/// One service point.  Lives for the whole run.
#[derive(Clone, Debug)]
pub struct Booth {
    pub id:     BoothId,
    pub kind:   BoothKind,
    state:      BoothState,
    busy_ticks: u64,
}

impl Booth {
    pub fn new(id: BoothId, kind: BoothKind) -> Self {
        Self { id, kind, state: BoothState::Free, busy_ticks: 0 }
    }

    /// Display name such as `AUTO-1` or `MANUAL-3`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.kind, self.id)
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.state, BoothState::Free)
    }

    /// The vehicle currently in service, if any.
    pub fn serving(&self) -> Option<&Vehicle> {
        match &self.state {
            BoothState::Free                => None,
            BoothState::Busy { vehicle, .. } => Some(vehicle),
        }
    }

    /// The tick at which the current service ends, if busy.
    pub fn completes_at(&self) -> Option<Tick> {
        match self.state {
            BoothState::Free                     => None,
            BoothState::Busy { completes_at, .. } => Some(completes_at),
        }
    }

    /// Cumulative ticks spent busy so far.
    #[inline]
    pub fn busy_ticks(&self) -> u64 {
        self.busy_ticks
    }

    #[inline]
    pub fn can_serve(&self, vehicle: &Vehicle) -> bool {
        self.kind.can_serve(vehicle.payment)
    }

    /// Attach `vehicle` and start serving it at `now`.
    ///
    /// Returns the completion tick.  If the booth is busy or cannot take the
    /// vehicle's payment method, the vehicle is handed back untouched.
    pub fn begin_service<R: RandomSource>(
        &mut self,
        vehicle: Vehicle,
        now:     Tick,
        times:   &ServiceTimes,
        rng:     &mut R,
    ) -> Result<Tick, Vehicle> {
        if !self.is_free() || !self.can_serve(&vehicle) {
            return Err(vehicle);
        }
        let completes_at = now + times.draw(self.kind, rng);
        self.state = BoothState::Busy { vehicle, completes_at };
        Ok(completes_at)
    }

    /// Advance the state machine to `now`.
    ///
    /// Counts one busy tick if busy, then frees the booth and yields its
    /// vehicle once `now` has reached the completion tick.
    pub fn advance(&mut self, now: Tick) -> Option<Vehicle> {
        let BoothState::Busy { completes_at, .. } = self.state else {
            return None;
        };
        self.busy_ticks += 1;
        if now < completes_at {
            return None;
        }
        match std::mem::replace(&mut self.state, BoothState::Free) {
            BoothState::Busy { vehicle, .. } => Some(vehicle),
            BoothState::Free                 => None,
        }
    }

    /// Copy the booth's reportable state.
    pub fn status(&self) -> BoothStatus {
        BoothStatus {
            id:      self.id,
            kind:    self.kind,
            status:  if self.is_free() { BoothStatusKind::Free } else { BoothStatusKind::Busy },
            serving: self.serving().copied(),
        }
    }
}

/// Build the plaza's booths: automatic first, then manual, numbered from 1.
pub fn build_booths(automatic: u32, manual: u32) -> Vec<Booth> {
    let kinds = std::iter::repeat_n(BoothKind::Automatic, automatic as usize)
        .chain(std::iter::repeat_n(BoothKind::Manual, manual as usize));

    let mut id = BoothId::FIRST;
    kinds
        .map(|kind| {
            let booth = Booth::new(id, kind);
            id = id.next();
            booth
        })
        .collect()
}
