//! `tp-sim`: the toll plaza simulation engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.duration_ticks:
//!   ① Arrival    : one Bernoulli trial at the tick's effective rate;
//!                   a new vehicle joins the back of the queue.
//!   ② Completion : each booth advances; finished vehicles are finalized.
//!   ③ Assignment : booths in random order take the earliest vehicle
//!                   they can serve.
//!   ④ Record     : max queue length, then a TickSnapshot.
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize` on snapshots, statistics, and [`SimOutcome`].  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tp_core::{PlazaConfig, SimRng};
//! use tp_sim::{NoopObserver, SimBuilder};
//!
//! let outcome = SimBuilder::new(config, SimRng::new(42))
//!     .build()?
//!     .run(&mut NoopObserver);
//! println!("{} vehicles served", outcome.stats.completed);
//! ```

pub mod arrival;
pub mod assignment;
pub mod booth;
pub mod builder;
pub mod error;
pub mod observer;
pub mod queue;
pub mod sim;
pub mod snapshot;
pub mod stats;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use arrival::ArrivalGenerator;
pub use booth::{Booth, BoothKind, BoothStatus, BoothStatusKind, ServiceTimes};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::VehicleQueue;
pub use sim::{Sim, SimOutcome};
pub use snapshot::{TickEvent, TickSnapshot};
pub use stats::{BoothUtilization, FinalStats};
pub use vehicle::Vehicle;
