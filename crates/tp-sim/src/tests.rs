//! Integration tests for tp-sim.

use std::collections::VecDeque;

use tp_core::{PaymentMethod, PlazaConfig, RandomSource, SimRng, Tick, TrafficPattern, VehicleId};

use crate::{NoopObserver, SimBuilder, Vehicle};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A `RandomSource` whose outcomes are fixed by the test.
///
/// `gen_bool` pops scripted answers and falls back to `default_bool` once the
/// script runs out; `gen_range_inclusive` returns `pick` clamped into the
/// range (or the low bound); `shuffle` leaves the order unchanged.
struct ScriptedRng {
    bools:        VecDeque<bool>,
    default_bool: bool,
    pick:         Option<u64>,
    draws:        usize,
}

impl ScriptedRng {
    fn always(answer: bool) -> Self {
        Self { bools: VecDeque::new(), default_bool: answer, pick: None, draws: 0 }
    }

    fn script(bools: &[bool], then: bool) -> Self {
        Self { bools: bools.iter().copied().collect(), default_bool: then, pick: None, draws: 0 }
    }

    fn pick(mut self, n: u64) -> Self {
        self.pick = Some(n);
        self
    }
}

impl RandomSource for ScriptedRng {
    fn gen_bool(&mut self, _p: f64) -> bool {
        self.draws += 1;
        self.bools.pop_front().unwrap_or(self.default_bool)
    }

    fn gen_range_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.draws += 1;
        self.pick.map_or(low, |n| n.clamp(low, high))
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn config(automatic: u32, manual: u32, duration: u64, rate: f64, pct: f64) -> PlazaConfig {
    PlazaConfig {
        automatic_booths:      automatic,
        manual_booths:         manual,
        duration_ticks:        duration,
        vehicles_per_minute:   rate,
        electronic_percentage: pct,
        traffic_pattern:       TrafficPattern::Stable,
    }
}

fn busy_config() -> PlazaConfig {
    PlazaConfig {
        traffic_pattern: TrafficPattern::RushHour,
        ..config(2, 2, 600, 20.0, 60.0)
    }
}

fn vehicle(id: u32, payment: PaymentMethod) -> Vehicle {
    Vehicle::new(VehicleId(id), payment, Tick(0))
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use tp_core::{BoothId, CoreError, RawPlazaConfig};

    use super::*;
    use crate::{BoothKind, SimError};

    #[test]
    fn booths_numbered_automatic_first() {
        let sim = SimBuilder::new(config(2, 3, 10, 0.0, 50.0), SimRng::new(1)).build().unwrap();
        let kinds: Vec<_> = sim.booths().iter().map(|b| (b.id, b.kind)).collect();
        assert_eq!(kinds, vec![
            (BoothId(1), BoothKind::Automatic),
            (BoothId(2), BoothKind::Automatic),
            (BoothId(3), BoothKind::Manual),
            (BoothId(4), BoothKind::Manual),
            (BoothId(5), BoothKind::Manual),
        ]);
        assert_eq!(sim.booths()[0].label(), "AUTO-1");
        assert_eq!(sim.booths()[4].label(), "MANUAL-5");
        assert!(sim.booths().iter().all(|b| b.is_free() && b.busy_ticks() == 0));
    }

    #[test]
    fn zero_automatic_service_rejected() {
        let result = SimBuilder::new(config(1, 0, 10, 1.0, 50.0), SimRng::new(1))
            .automatic_service_ticks(0)
            .build();
        assert!(matches!(result, Err(SimError::ServiceTimes(_))));
    }

    #[test]
    fn inverted_manual_range_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let result = SimBuilder::new(config(0, 1, 10, 1.0, 50.0), SimRng::new(1))
            .manual_service_range(12..=7)
            .build();
        assert!(matches!(result, Err(SimError::ServiceTimes(_))));
    }

    #[test]
    fn oversized_service_times_rejected() {
        use crate::builder::MAX_SERVICE_TICKS;

        let automatic = SimBuilder::new(config(1, 0, 10, 1.0, 50.0), SimRng::new(1))
            .automatic_service_ticks(u64::MAX)
            .build();
        assert!(matches!(automatic, Err(SimError::ServiceTimes(_))));

        let manual = SimBuilder::new(config(0, 1, 10, 1.0, 50.0), SimRng::new(1))
            .manual_service_range(7..=MAX_SERVICE_TICKS + 1)
            .build();
        assert!(matches!(manual, Err(SimError::ServiceTimes(_))));

        let at_cap = SimBuilder::new(config(1, 1, 10, 1.0, 50.0), SimRng::new(1))
            .automatic_service_ticks(MAX_SERVICE_TICKS)
            .manual_service_range(1..=MAX_SERVICE_TICKS)
            .build();
        assert!(at_cap.is_ok());
    }

    #[test]
    fn from_raw_reports_missing_field() {
        let raw = RawPlazaConfig::from_json_str(
            r#"{"automaticBooths": 1, "manualBooths": 1, "vehiclesPerMinute": 5, "electronicPercentage": 50}"#,
        )
        .unwrap();
        let result = SimBuilder::from_raw(raw, SimRng::new(1));
        assert!(matches!(
            result,
            Err(SimError::Config(CoreError::MissingField("durationTicks")))
        ));
    }
}

// ── Booth state machine ───────────────────────────────────────────────────────

#[cfg(test)]
mod booth_tests {
    use tp_core::BoothId;

    use super::*;
    use crate::{Booth, BoothKind, BoothStatusKind, ServiceTimes};

    #[test]
    fn capability_predicate() {
        assert!(BoothKind::Automatic.can_serve(PaymentMethod::Electronic));
        assert!(!BoothKind::Automatic.can_serve(PaymentMethod::Cash));
        assert!(BoothKind::Manual.can_serve(PaymentMethod::Electronic));
        assert!(BoothKind::Manual.can_serve(PaymentMethod::Cash));
    }

    #[test]
    fn automatic_hands_back_cash_vehicle() {
        let mut booth = Booth::new(BoothId(1), BoothKind::Automatic);
        let cash = vehicle(1, PaymentMethod::Cash);
        let result = booth.begin_service(cash, Tick(0), &ServiceTimes::default(), &mut SimRng::new(0));
        assert_eq!(result, Err(cash));
        assert!(booth.is_free());
    }

    #[test]
    fn busy_booth_hands_back_second_vehicle() {
        let mut booth = Booth::new(BoothId(1), BoothKind::Manual);
        let times = ServiceTimes::default();
        let mut rng = SimRng::new(0);
        booth.begin_service(vehicle(1, PaymentMethod::Cash), Tick(0), &times, &mut rng).unwrap();
        let second = vehicle(2, PaymentMethod::Cash);
        assert_eq!(booth.begin_service(second, Tick(0), &times, &mut rng), Err(second));
        assert_eq!(booth.serving().map(|v| v.id), Some(VehicleId(1)));
    }

    #[test]
    fn automatic_completes_after_three_ticks() {
        let mut booth = Booth::new(BoothId(1), BoothKind::Automatic);
        let done_at = booth
            .begin_service(vehicle(1, PaymentMethod::Electronic), Tick(0), &ServiceTimes::default(), &mut SimRng::new(0))
            .unwrap();
        assert_eq!(done_at, Tick(3));
        assert_eq!(booth.completes_at(), Some(Tick(3)));

        assert_eq!(booth.advance(Tick(1)), None);
        assert_eq!(booth.advance(Tick(2)), None);
        let released = booth.advance(Tick(3)).unwrap();
        assert_eq!(released.id, VehicleId(1));
        assert!(booth.is_free());
        // Counted on ticks 1, 2, and the completion tick 3.
        assert_eq!(booth.busy_ticks(), 3);

        // Free booths don't accumulate busy time.
        assert_eq!(booth.advance(Tick(4)), None);
        assert_eq!(booth.busy_ticks(), 3);
    }

    #[test]
    fn overdue_service_completes_on_next_advance() {
        let mut booth = Booth::new(BoothId(1), BoothKind::Automatic);
        booth
            .begin_service(vehicle(1, PaymentMethod::Electronic), Tick(0), &ServiceTimes::default(), &mut SimRng::new(0))
            .unwrap();
        assert!(booth.advance(Tick(10)).is_some());
    }

    #[test]
    fn manual_duration_within_bounds() {
        let times = ServiceTimes::default();
        let mut rng = SimRng::new(3);
        for _ in 0..500 {
            let d = times.draw(BoothKind::Manual, &mut rng);
            assert!((7..=12).contains(&d), "got {d}");
        }
    }

    #[test]
    fn status_is_a_copy() {
        let mut booth = Booth::new(BoothId(4), BoothKind::Manual);
        let free = booth.status();
        assert_eq!(free.status, BoothStatusKind::Free);
        assert_eq!(free.serving, None);

        booth
            .begin_service(vehicle(9, PaymentMethod::Cash), Tick(0), &ServiceTimes::default(), &mut ScriptedRng::always(true))
            .unwrap();
        let busy = booth.status();
        assert_eq!(busy.status, BoothStatusKind::Busy);
        assert_eq!(busy.serving.map(|v| v.id), Some(VehicleId(9)));
        // The earlier copy is unaffected.
        assert_eq!(free.status, BoothStatusKind::Free);
    }
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;
    use crate::VehicleQueue;

    #[test]
    fn take_first_preserves_remaining_order() {
        let mut q = VehicleQueue::new();
        q.push_back(vehicle(1, PaymentMethod::Cash));
        q.push_back(vehicle(2, PaymentMethod::Cash));
        q.push_back(vehicle(3, PaymentMethod::Electronic));
        q.push_back(vehicle(4, PaymentMethod::Cash));
        q.push_back(vehicle(5, PaymentMethod::Electronic));

        let taken = q.take_first(|v| v.payment == PaymentMethod::Electronic).unwrap();
        assert_eq!(taken.id, VehicleId(3));

        let ids: Vec<_> = q.iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn reinsert_restores_original_position() {
        let mut q = VehicleQueue::new();
        for id in 1..=4 {
            q.push_back(vehicle(id, PaymentMethod::Cash));
        }
        let pos = q.position(|v| v.id == VehicleId(2)).unwrap();
        let taken = q.remove(pos).unwrap();
        q.insert(pos, taken);

        let ids: Vec<_> = q.iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn take_first_none_when_nothing_matches() {
        let mut q = VehicleQueue::new();
        q.push_back(vehicle(1, PaymentMethod::Cash));
        assert!(q.take_first(|v| v.payment == PaymentMethod::Electronic).is_none());
        assert_eq!(q.len(), 1);
    }
}

// ── Arrival generator ─────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_tests {
    use super::*;
    use crate::ArrivalGenerator;
    use crate::arrival::spawn_probability;

    #[test]
    fn probability_from_rate() {
        assert_eq!(spawn_probability(60.0), 1.0);
        assert_eq!(spawn_probability(30.0), 0.5);
        assert!((spawn_probability(6.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn zero_rate_draws_nothing() {
        let mut arrivals = ArrivalGenerator::new(&config(1, 1, 100, 0.0, 50.0));
        let mut rng = ScriptedRng::always(true);
        for t in 0..100 {
            let rate = arrivals.effective_rate(Tick(t));
            assert!(arrivals.try_arrive(Tick(t), rate, &mut rng).is_none());
        }
        assert_eq!(rng.draws, 0);
        assert_eq!(arrivals.generated(), 0);
    }

    #[test]
    fn ids_increase_from_one() {
        let mut arrivals = ArrivalGenerator::new(&config(1, 0, 10, 60.0, 100.0));
        let mut rng = SimRng::new(5);
        let ids: Vec<_> = (0..5)
            .map(|t| arrivals.try_arrive(Tick(t), 60.0, &mut rng).unwrap().id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(arrivals.generated(), 5);
    }

    #[test]
    fn payment_mix_extremes() {
        let mut rng = SimRng::new(11);

        let mut all_cash = ArrivalGenerator::new(&config(0, 1, 50, 120.0, 0.0));
        for t in 0..50 {
            let v = all_cash.try_arrive(Tick(t), 120.0, &mut rng).unwrap();
            assert_eq!(v.payment, PaymentMethod::Cash);
            assert_eq!(v.arrived_at, Tick(t));
        }

        let mut all_tag = ArrivalGenerator::new(&config(1, 0, 50, 120.0, 100.0));
        for t in 0..50 {
            let v = all_tag.try_arrive(Tick(t), 120.0, &mut rng).unwrap();
            assert_eq!(v.payment, PaymentMethod::Electronic);
        }
    }

    #[test]
    fn failed_trial_skips_payment_draw() {
        let mut arrivals = ArrivalGenerator::new(&config(1, 0, 10, 30.0, 50.0));
        let mut rng = ScriptedRng::always(false);
        assert!(arrivals.try_arrive(Tick(0), 30.0, &mut rng).is_none());
        assert_eq!(rng.draws, 1);
    }

    #[test]
    fn rush_hour_effective_rate() {
        let cfg = PlazaConfig {
            traffic_pattern: TrafficPattern::RushHour,
            ..config(1, 1, 100, 30.0, 50.0)
        };
        let arrivals = ArrivalGenerator::new(&cfg);
        assert_eq!(arrivals.effective_rate(Tick(10)), 60.0);
        assert_eq!(arrivals.effective_rate(Tick(50)), 15.0);
        assert_eq!(arrivals.effective_rate(Tick(90)), 60.0);
    }
}

// ── Assignment policy ─────────────────────────────────────────────────────────

#[cfg(test)]
mod assignment_tests {
    use super::*;
    use crate::assignment::assign_free_booths;
    use crate::booth::build_booths;
    use crate::{ServiceTimes, VehicleQueue};

    fn queue_of(payments: &[PaymentMethod]) -> VehicleQueue {
        let mut q = VehicleQueue::new();
        for (i, &p) in payments.iter().enumerate() {
            q.push_back(vehicle(i as u32 + 1, p));
        }
        q
    }

    #[test]
    fn automatic_skips_cash_at_front() {
        use PaymentMethod::*;
        let mut booths = build_booths(1, 0);
        let mut queue = queue_of(&[Cash, Cash, Electronic]);
        let n = assign_free_booths(&mut booths, &mut queue, Tick(0), &ServiceTimes::default(), &mut ScriptedRng::always(true));
        assert_eq!(n, 1);
        assert_eq!(booths[0].serving().map(|v| v.id), Some(VehicleId(3)));
        let left: Vec<_> = queue.iter().map(|v| v.id.0).collect();
        assert_eq!(left, vec![1, 2]);
    }

    #[test]
    fn cash_waits_when_only_automatic_free() {
        use PaymentMethod::*;
        let mut booths = build_booths(3, 0);
        let mut queue = queue_of(&[Cash, Cash]);
        let n = assign_free_booths(&mut booths, &mut queue, Tick(0), &ServiceTimes::default(), &mut SimRng::new(0));
        assert_eq!(n, 0);
        assert_eq!(queue.len(), 2);
        assert!(booths.iter().all(|b| b.is_free()));
    }

    #[test]
    fn one_vehicle_per_booth_per_tick() {
        use PaymentMethod::*;
        let mut booths = build_booths(1, 1);
        let mut queue = queue_of(&[Electronic, Electronic, Cash, Electronic]);
        let n = assign_free_booths(&mut booths, &mut queue, Tick(0), &ServiceTimes::default(), &mut SimRng::new(0));
        assert_eq!(n, 2);
        assert_eq!(queue.len(), 2);
        assert!(booths.iter().all(|b| !b.is_free()));
    }

    #[test]
    fn visit_order_decides_who_gets_the_front_vehicle() {
        use PaymentMethod::*;
        // Identity order: booth 1 (automatic) first, so it takes vehicle 1
        // and the manual booth takes vehicle 2.
        let mut booths = build_booths(1, 1);
        let mut queue = queue_of(&[Electronic, Cash]);
        assign_free_booths(&mut booths, &mut queue, Tick(0), &ServiceTimes::default(), &mut ScriptedRng::always(true));
        assert_eq!(booths[0].serving().map(|v| v.id), Some(VehicleId(1)));
        assert_eq!(booths[1].serving().map(|v| v.id), Some(VehicleId(2)));
    }

    #[test]
    fn busy_booths_are_skipped() {
        use PaymentMethod::*;
        let times = ServiceTimes::default();
        let mut booths = build_booths(0, 1);
        let mut queue = queue_of(&[Cash, Cash]);
        let mut rng = ScriptedRng::always(true).pick(9);
        assign_free_booths(&mut booths, &mut queue, Tick(0), &times, &mut rng);
        assert_eq!(booths[0].completes_at(), Some(Tick(9)));
        let n = assign_free_booths(&mut booths, &mut queue, Tick(1), &times, &mut rng);
        assert_eq!(n, 0);
        assert_eq!(queue.len(), 1);
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use tp_core::BoothId;

    use super::*;
    use crate::{BoothKind, FinalStats, SimObserver, TickEvent, TickSnapshot};

    #[test]
    fn forced_arrivals_single_automatic_booth() {
        let sim = SimBuilder::new(config(1, 0, 5, 60.0, 100.0), ScriptedRng::always(true))
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);

        assert_eq!(outcome.history.len(), 5);
        let t0 = &outcome.history[0];
        assert_eq!(t0.event, Some(TickEvent::Arrived { vehicle: VehicleId(1), payment: PaymentMethod::Electronic }));
        assert_eq!(t0.queue_len, 0, "vehicle 1 goes straight to the free booth");
        assert_eq!(t0.booths[0].serving.map(|v| v.id), Some(VehicleId(1)));

        assert_eq!(outcome.history[2].completed_total, 0);
        assert_eq!(outcome.history[3].completed_total, 1);
        // Arrival outranks the completion on tick 3.
        assert!(outcome.history[3].has_arrival());

        let stats = &outcome.stats;
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.avg_time_in_system, 3.0);
        assert_eq!(stats.max_time_in_system, 3);
        assert_eq!(stats.max_queue_len, 3);
        assert_eq!(stats.booth_utilization[0].busy_ticks, 4);
        assert_eq!(stats.booth_utilization[0].utilization, 80.0);
    }

    #[test]
    fn single_arrival_reports_completion_event() {
        // Arrive + electronic on tick 0, then nothing more.
        let rng = ScriptedRng::script(&[true, true], false);
        let sim = SimBuilder::new(config(1, 0, 5, 60.0, 100.0), rng).build().unwrap();
        let outcome = sim.run(&mut NoopObserver);

        let event = outcome.history[3].event.unwrap();
        assert_eq!(event, TickEvent::Completed { booth: BoothId(1), kind: BoothKind::Automatic, vehicle: VehicleId(1) });
        assert_eq!(event.to_string(), "AUTO-1 finished serving vehicle #1.");
        assert_eq!(outcome.history[1].event, None);
        assert_eq!(outcome.stats.max_time_in_system, 3);
        assert_eq!(outcome.stats.booth_utilization[0].utilization, 60.0);
    }

    #[test]
    fn arrival_event_text() {
        let e = TickEvent::Arrived { vehicle: VehicleId(12), payment: PaymentMethod::Cash };
        assert_eq!(e.to_string(), "Vehicle #12 (cash) joined the queue.");
    }

    #[test]
    fn zero_rate_never_queues() {
        let outcome = SimBuilder::new(config(2, 2, 300, 0.0, 50.0), SimRng::new(8))
            .build()
            .unwrap()
            .run(&mut NoopObserver);
        assert_eq!(outcome.history.len(), 300);
        assert!(outcome.history.iter().all(|s| s.queue_len == 0 && s.event.is_none()));
        assert_eq!(outcome.stats.completed, 0);
        assert_eq!(outcome.stats.max_queue_len, 0);
        assert_eq!(outcome.stats.avg_time_in_system, 0.0);
        assert_eq!(outcome.stats.max_time_in_system, 0);
        assert!(outcome.stats.booth_utilization.iter().all(|u| u.utilization == 0.0));
    }

    #[test]
    fn zero_duration_runs_no_ticks() {
        let outcome = SimBuilder::new(config(1, 1, 0, 30.0, 50.0), SimRng::new(1))
            .build()
            .unwrap()
            .run(&mut NoopObserver);
        assert!(outcome.history.is_empty());
        assert_eq!(outcome.stats.booth_utilization.len(), 2);
        assert!(outcome.stats.booth_utilization.iter().all(|u| u.utilization == 0.0));
    }

    #[test]
    fn vehicles_are_conserved_every_tick() {
        let outcome = SimBuilder::new(busy_config(), SimRng::new(21))
            .build()
            .unwrap()
            .run(&mut NoopObserver);

        let mut generated = 0;
        for snap in &outcome.history {
            if snap.has_arrival() {
                generated += 1;
            }
            assert_eq!(
                snap.completed_total + snap.queue_len + snap.busy_booths(),
                generated,
                "conservation broken at {}",
                snap.tick,
            );
        }
        assert!(generated > 0);
    }

    #[test]
    fn automatic_booths_never_serve_cash() {
        let outcome = SimBuilder::new(busy_config(), SimRng::new(5))
            .build()
            .unwrap()
            .run(&mut NoopObserver);

        let mut saw_cash = false;
        for snap in &outcome.history {
            for booth in &snap.booths {
                if let Some(v) = booth.serving {
                    saw_cash |= v.payment == PaymentMethod::Cash;
                    if booth.kind == BoothKind::Automatic {
                        assert_eq!(v.payment, PaymentMethod::Electronic, "at {}", snap.tick);
                    }
                }
            }
        }
        assert!(saw_cash, "the run should exercise cash vehicles");
    }

    #[test]
    fn utilization_within_bounds() {
        let cfg = config(1, 1, 400, 90.0, 50.0);
        let outcome = SimBuilder::new(cfg, SimRng::new(2)).build().unwrap().run(&mut NoopObserver);
        for u in &outcome.stats.booth_utilization {
            assert!((0.0..=100.0).contains(&u.utilization), "{u:?}");
            assert!(u.busy_ticks <= 400);
        }
    }

    #[test]
    fn same_seed_same_outcome() {
        let a = SimBuilder::new(busy_config(), SimRng::new(77)).build().unwrap().run(&mut NoopObserver);
        let b = SimBuilder::new(busy_config(), SimRng::new(77)).build().unwrap().run(&mut NoopObserver);
        assert_eq!(a, b);
    }

    #[test]
    fn step_and_run_ticks() {
        let mut sim = SimBuilder::new(config(1, 1, 10, 12.0, 50.0), SimRng::new(4)).build().unwrap();
        assert_eq!(sim.step(&mut NoopObserver).map(|s| s.tick), Some(Tick(0)));
        assert_eq!(sim.run_ticks(4, &mut NoopObserver), 4);
        assert_eq!(sim.clock().current_tick, Tick(5));
        assert_eq!(sim.run_ticks(100, &mut NoopObserver), 5);
        assert!(sim.step(&mut NoopObserver).is_none());
        assert_eq!(sim.history().len(), 10);

        let in_flight = sim.queue().len() + sim.in_service() + sim.completed().len();
        assert_eq!(in_flight as u64, sim.generated());
    }

    #[test]
    fn finalized_times_are_consistent() {
        let mut sim = SimBuilder::new(busy_config(), SimRng::new(13)).build().unwrap();
        sim.run_ticks(u64::MAX, &mut NoopObserver);
        for v in sim.completed() {
            assert!(v.is_finalized());
            let t = v.time_in_system.expect("completed vehicles are finalized");
            assert!(t >= 3, "vehicle {} spent {t} ticks", v.id);
        }
        let stats: FinalStats = sim.stats();
        assert_eq!(stats.completed, sim.completed().len());
    }

    #[test]
    fn average_ties_round_to_even() {
        // One vehicle at 4 ticks and seven at 3: 25 / 8 = 3.125.
        let completed: Vec<Vehicle> = (1..=8)
            .map(|id| {
                let done = if id == 1 { 4 } else { 3 };
                vehicle(id, PaymentMethod::Electronic).finalized(Tick(done))
            })
            .collect();
        let stats = FinalStats::compute(&completed, &[], 0, 10);
        assert_eq!(stats.avg_time_in_system, 3.12);
        assert_eq!(stats.max_time_in_system, 4);
    }

    #[test]
    fn round2_ties_to_even() {
        use crate::stats::round2;
        assert_eq!(round2(3.125), 3.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(12.5), 12.5);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }

    #[derive(Default)]
    struct Recorder {
        starts:      u64,
        ends:        Vec<Tick>,
        completions: Vec<(BoothId, Vehicle)>,
        final_count: Option<usize>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_vehicle_completed(&mut self, _tick: Tick, booth: BoothId, vehicle: &Vehicle) {
            self.completions.push((booth, *vehicle));
        }
        fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
            self.ends.push(snapshot.tick);
        }
        fn on_sim_end(&mut self, stats: &FinalStats) {
            self.final_count = Some(stats.completed);
        }
    }

    #[test]
    fn observer_sees_every_tick_and_completion() {
        let cfg = config(1, 1, 200, 10.0, 50.0);
        let mut rec = Recorder::default();
        let outcome = SimBuilder::new(cfg, SimRng::new(30)).build().unwrap().run(&mut rec);

        assert_eq!(rec.starts, 200);
        assert_eq!(rec.ends.len(), 200);
        assert_eq!(rec.ends.last(), Some(&Tick(199)));
        assert_eq!(rec.completions.len(), outcome.stats.completed);
        assert_eq!(rec.final_count, Some(outcome.stats.completed));

        for (booth, v) in &rec.completions {
            let t = v.time_in_system.unwrap();
            // Booth 2 is the manual booth: never faster than its minimum.
            if *booth == BoothId(2) {
                assert!(t >= 7, "manual service took {t}");
            } else {
                assert!(t >= 3);
                assert_eq!(v.payment, PaymentMethod::Electronic);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn outcome_serializes_to_camel_case_json() {
        let outcome = SimBuilder::new(config(1, 0, 5, 60.0, 100.0), ScriptedRng::always(true))
            .build()
            .unwrap()
            .run(&mut NoopObserver);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["history"][0]["queueLen"], 0);
        assert_eq!(json["history"][0]["event"], "Vehicle #1 (electronic) joined the queue.");
        assert_eq!(json["history"][0]["booths"][0]["status"], "busy");
        assert_eq!(json["stats"]["maxTimeInSystem"], 3);
        assert_eq!(json["stats"]["boothUtilization"][0]["utilization"], 80.0);
    }
}
