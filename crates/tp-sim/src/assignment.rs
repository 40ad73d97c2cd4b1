//! Matching free booths to waiting vehicles.
//!
//! Booths are visited in a fresh uniformly random order every tick so that no
//! booth of a class is systematically preferred.  Each free booth takes the
//! earliest queued vehicle it can serve, at most one per tick.

use log::trace;
use tp_core::{RandomSource, Tick};

use crate::{Booth, ServiceTimes, VehicleQueue};

/// Run one assignment pass at `now`.  Returns the number of vehicles moved
/// from the queue into booths.
///
/// The shuffle is drawn every tick, even when the queue is empty, so the
/// random stream depends only on the tick count and not on queue contents.
pub fn assign_free_booths<R: RandomSource>(
    booths: &mut [Booth],
    queue:  &mut VehicleQueue,
    now:    Tick,
    times:  &ServiceTimes,
    rng:    &mut R,
) -> usize {
    let mut order: Vec<usize> = (0..booths.len()).collect();
    rng.shuffle(&mut order);

    let mut assigned = 0;
    for i in order {
        if queue.is_empty() {
            break;
        }
        let booth = &mut booths[i];
        if !booth.is_free() {
            continue;
        }
        let Some(pos) = queue.position(|v| booth.can_serve(v)) else {
            continue;
        };
        let Some(vehicle) = queue.remove(pos) else {
            continue;
        };
        match booth.begin_service(vehicle, now, times, rng) {
            Ok(completes_at) => {
                trace!(
                    "{now}: {} takes vehicle {} until {completes_at}",
                    booth.label(),
                    vehicle.id,
                );
                assigned += 1;
            }
            Err(vehicle) => {
                debug_assert!(
                    !(booth.is_free() && booth.can_serve(&vehicle)),
                    "{} refused vehicle {} it can serve",
                    booth.label(),
                    vehicle.id,
                );
                queue.insert(pos, vehicle);
            }
        }
    }
    assigned
}
