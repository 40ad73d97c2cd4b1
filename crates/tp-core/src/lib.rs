//! `tp-core`: foundational types for the toll plaza simulator.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no `tp-*`
//! dependencies and only `rand`, `serde`, and `thiserror` externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `BoothId`                                |
//! | [`time`]        | `Tick`, `SimClock`, `TICKS_PER_MINUTE`                |
//! | [`rng`]         | `RandomSource` trait, `SimRng` (seedable)             |
//! | [`payment`]     | `PaymentMethod` enum                                  |
//! | [`config`]      | `RawPlazaConfig`, `PlazaConfig`, `TrafficPattern`     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod payment;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PlazaConfig, RawPlazaConfig, TrafficPattern};
pub use error::{CoreError, CoreResult};
pub use ids::{BoothId, VehicleId};
pub use payment::PaymentMethod;
pub use rng::{RandomSource, SimRng};
pub use time::{SimClock, Tick, TICKS_PER_MINUTE};
