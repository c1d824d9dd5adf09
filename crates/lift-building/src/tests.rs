//! Unit tests for lift-building.

use lift_core::{ElevatorId, FloorId, PassengerId, Tick};

use crate::{
    DispatchPolicy, Elevator, ElevatorState, Floor, NearestTargetDispatch, PassengerStore,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn floors(n: u32) -> Vec<Floor> {
    (0..n).map(|i| Floor::new(FloorId(i))).collect()
}

/// Elevator 0 with the reference dwell (2 ticks) and capacity (8).
fn elevator(travel: u32) -> Elevator {
    Elevator::new(ElevatorId(0), travel, 2, 8)
}

/// Create a passenger and queue it on its start floor.
fn arrive(
    store:  &mut PassengerStore,
    floors: &mut [Floor],
    start:  u32,
    end:    u32,
    at:     u64,
) -> PassengerId {
    let id = store.insert(FloorId(start), FloorId(end), Tick(at));
    floors[start as usize].add_passenger(id);
    id
}

/// Run `update` once at `tick` with the reference dispatch policy.
fn step(
    e:         &mut Elevator,
    tick:      u64,
    floors:    &mut [Floor],
    store:     &mut PassengerStore,
    delivered: &mut Vec<PassengerId>,
) -> crate::UpdateOutcome {
    e.update(Tick(tick), floors, store, delivered, &NearestTargetDispatch)
}

// ── Floor ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod floor {
    use super::*;

    #[test]
    fn dequeues_in_arrival_order() {
        let mut f = Floor::new(FloorId(3));
        for i in [4, 1, 9, 2] {
            f.add_passenger(PassengerId(i));
        }
        let order: Vec<u32> = std::iter::from_fn(|| f.next_passenger()).map(|p| p.0).collect();
        assert_eq!(order, vec![4, 1, 9, 2]);
    }

    #[test]
    fn empty_floor_returns_none() {
        let mut f = Floor::new(FloorId(0));
        assert!(!f.has_waiting_passengers());
        assert_eq!(f.next_passenger(), None);
        assert_eq!(f.waiting_count(), 0);
    }

    #[test]
    fn waiting_count_tracks_queue() {
        let mut f = Floor::new(FloorId(0));
        f.add_passenger(PassengerId(0));
        f.add_passenger(PassengerId(1));
        assert_eq!(f.waiting_count(), 2);
        f.next_passenger();
        assert_eq!(f.waiting_count(), 1);
        assert_eq!(f.number(), FloorId(0));
    }
}

// ── Passenger ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod passenger {
    use super::*;

    #[test]
    fn store_assigns_dense_ids() {
        let mut store = PassengerStore::new();
        let a = store.insert(FloorId(0), FloorId(5), Tick(3));
        let b = store.insert(FloorId(2), FloorId(1), Tick(1));
        assert_eq!(a, PassengerId(0));
        assert_eq!(b, PassengerId(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b).start_floor, FloorId(2));
    }

    #[test]
    fn pickup_recorded_once() {
        let mut store = PassengerStore::new();
        let id = store.insert(FloorId(0), FloorId(5), Tick(3));
        let p = store.get_mut(id);
        p.mark_picked_up(Tick(7));
        p.mark_picked_up(Tick(9));
        assert_eq!(p.picked_up_at(), Some(Tick(7)));
        assert_eq!(p.wait_time(), Some(4));
        assert_eq!(p.travel_time(), None);
    }

    #[test]
    fn delivery_without_pickup_backfills_pickup() {
        let mut store = PassengerStore::new();
        let id = store.insert(FloorId(0), FloorId(5), Tick(3));
        let p = store.get_mut(id);
        p.mark_delivered(Tick(12));
        assert!(p.is_picked_up());
        assert!(p.is_delivered());
        assert_eq!(p.picked_up_at(), Some(Tick(12)));
        assert_eq!(p.wait_time(), Some(9));
        assert_eq!(p.travel_time(), Some(0));
    }

    #[test]
    fn fresh_passenger_has_no_timestamps() {
        let mut store = PassengerStore::new();
        let id = store.insert(FloorId(1), FloorId(2), Tick(0));
        let p = store.get(id);
        assert!(!p.is_picked_up());
        assert_eq!(p.wait_time(), None);
        assert_eq!(p.delivered_at(), None);
    }
}

// ── Elevator state machine ────────────────────────────────────────────────────

#[cfg(test)]
mod elevator {
    use super::*;

    #[test]
    fn starts_stopped_at_ground() {
        let e = elevator(1);
        assert_eq!(e.state(), ElevatorState::Stopped);
        assert_eq!(e.current_floor(), FloorId(0));
        assert_eq!(e.passenger_count(), 0);
        assert!(e.can_pick_up());
    }

    #[test]
    fn idle_with_nothing_to_do() {
        let mut fl = floors(10);
        let mut store = PassengerStore::new();
        let mut delivered = vec![];
        let mut e = elevator(1);
        for t in 0..5 {
            step(&mut e, t, &mut fl, &mut store, &mut delivered);
            assert_eq!(e.state(), ElevatorState::Stopped);
            assert_eq!(e.target_floor(), e.current_floor());
        }
    }

    #[test]
    fn boards_everyone_in_one_stopped_tick() {
        let mut fl = floors(10);
        let mut store = PassengerStore::new();
        let a = arrive(&mut store, &mut fl, 0, 4, 0);
        let b = arrive(&mut store, &mut fl, 0, 7, 0);
        let mut delivered = vec![];
        let mut e = elevator(1);

        let out = step(&mut e, 0, &mut fl, &mut store, &mut delivered);
        assert_eq!(out.boarded, 2);
        assert_eq!(e.boarded(), &[a, b]);
        assert_eq!(store.get(a).picked_up_at(), Some(Tick(0)));
        assert_eq!(store.get(b).picked_up_at(), Some(Tick(0)));
        assert!(!fl[0].has_waiting_passengers());
        // Nearest destination is floor 4.
        assert_eq!(e.target_floor(), FloorId(4));
        assert_eq!(e.state(), ElevatorState::MovingUp);
    }

    #[test]
    fn boarding_stops_at_capacity() {
        let mut fl = floors(20);
        let mut store = PassengerStore::new();
        for i in 0..11 {
            arrive(&mut store, &mut fl, 0, 10 + i % 3, 0);
        }
        let mut delivered = vec![];
        let mut e = elevator(1);

        let out = step(&mut e, 0, &mut fl, &mut store, &mut delivered);
        assert_eq!(out.boarded, 8);
        assert_eq!(e.passenger_count(), 8);
        assert!(!e.can_pick_up());
        assert_eq!(fl[0].waiting_count(), 3);
        // FIFO: the first eight arrivals are aboard.
        let ids: Vec<u32> = e.boarded().iter().map(|p| p.0).collect();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn travel_and_dwell_timing() {
        // travel = 2 ticks per floor, one passenger 0 → 3.
        let mut fl = floors(10);
        let mut store = PassengerStore::new();
        let p = arrive(&mut store, &mut fl, 0, 3, 0);
        let mut delivered = vec![];
        let mut e = elevator(2);

        let expected = [
            (0, 0, ElevatorState::MovingUp),
            (1, 0, ElevatorState::MovingUp),
            (2, 1, ElevatorState::MovingUp),
            (3, 1, ElevatorState::MovingUp),
            (4, 2, ElevatorState::MovingUp),
            (5, 2, ElevatorState::MovingUp),
            (6, 3, ElevatorState::Stopping),
            (7, 3, ElevatorState::Stopping),
            (8, 3, ElevatorState::Stopped),
        ];
        for (tick, floor, state) in expected {
            step(&mut e, tick, &mut fl, &mut store, &mut delivered);
            assert_eq!(e.current_floor(), FloorId(floor), "floor at tick {tick}");
            assert_eq!(e.state(), state, "state at tick {tick}");
        }
        assert!(delivered.is_empty());

        // Next Stopped update drops the passenger off.
        let out = step(&mut e, 9, &mut fl, &mut store, &mut delivered);
        assert_eq!(out.delivered, 1);
        assert_eq!(delivered, vec![p]);
        assert_eq!(store.get(p).delivered_at(), Some(Tick(9)));
        assert_eq!(e.passenger_count(), 0);
    }

    #[test]
    fn stops_for_waiting_passenger_en_route() {
        let mut fl = floors(10);
        let mut store = PassengerStore::new();
        arrive(&mut store, &mut fl, 0, 6, 0);
        let mut delivered = vec![];
        let mut e = elevator(1);

        step(&mut e, 0, &mut fl, &mut store, &mut delivered);
        arrive(&mut store, &mut fl, 2, 8, 1);
        step(&mut e, 1, &mut fl, &mut store, &mut delivered);
        assert_eq!(e.current_floor(), FloorId(1));
        assert_eq!(e.state(), ElevatorState::MovingUp);
        step(&mut e, 2, &mut fl, &mut store, &mut delivered);
        assert_eq!(e.current_floor(), FloorId(2));
        assert_eq!(e.state(), ElevatorState::Stopping);
    }

    #[test]
    fn drop_off_keeps_other_passengers_in_order() {
        let mut fl = floors(10);
        let mut store = PassengerStore::new();
        let a = arrive(&mut store, &mut fl, 0, 5, 0);
        let b = arrive(&mut store, &mut fl, 0, 1, 0);
        let c = arrive(&mut store, &mut fl, 0, 7, 0);
        let mut delivered = vec![];
        let mut e = elevator(1);

        step(&mut e, 0, &mut fl, &mut store, &mut delivered);
        assert_eq!(e.target_floor(), FloorId(1));
        // tick 1: floor 1 → Stopping; ticks 2,3: dwell → Stopped; tick 4: drop off.
        for t in 1..=4 {
            step(&mut e, t, &mut fl, &mut store, &mut delivered);
        }
        assert_eq!(delivered, vec![b]);
        assert_eq!(e.boarded(), &[a, c]);
        assert_eq!(e.target_floor(), FloorId(5));
    }

    #[test]
    fn out_of_range_floor_skips_tick() {
        let mut store = PassengerStore::new();
        let mut delivered = vec![];
        let mut e = elevator(1);
        let out = step(&mut e, 0, &mut [], &mut store, &mut delivered);
        assert_eq!(out, crate::UpdateOutcome::default());
        assert_eq!(e.state(), ElevatorState::Stopped);
    }

    /// Policy that always sends the car to a floor beyond the roof.
    struct Skyward;

    impl DispatchPolicy for Skyward {
        fn next_target(&self, _: &Elevator, _: &[Floor], _: &PassengerStore) -> FloorId {
            FloorId(1_000)
        }
    }

    #[test]
    fn clamps_at_building_bounds() {
        let mut fl = floors(3);
        let mut store = PassengerStore::new();
        let mut delivered = vec![];
        let mut e = elevator(1);

        e.update(Tick(0), &mut fl, &mut store, &mut delivered, &Skyward);
        assert_eq!(e.state(), ElevatorState::MovingUp);
        e.update(Tick(1), &mut fl, &mut store, &mut delivered, &Skyward);
        e.update(Tick(2), &mut fl, &mut store, &mut delivered, &Skyward);
        assert_eq!(e.current_floor(), FloorId(2));
        assert_eq!(e.state(), ElevatorState::MovingUp);

        e.update(Tick(3), &mut fl, &mut store, &mut delivered, &Skyward);
        assert_eq!(e.current_floor(), FloorId(2));
        assert_eq!(e.state(), ElevatorState::Stopped);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;
    use crate::dispatch::nearest_waiting_floor;

    #[test]
    fn no_waiting_passengers_stays_put() {
        let fl = floors(10);
        assert_eq!(nearest_waiting_floor(FloorId(4), &fl), FloorId(4));
    }

    #[test]
    fn nearest_waiting_floor_tie_goes_low() {
        let mut fl = floors(10);
        fl[2].add_passenger(PassengerId(0));
        fl[8].add_passenger(PassengerId(1));
        assert_eq!(nearest_waiting_floor(FloorId(5), &fl), FloorId(2));
        assert_eq!(nearest_waiting_floor(FloorId(6), &fl), FloorId(8));
    }

    /// Board passengers bound for `ends` at floor `at` and leave the car
    /// stopped there.
    fn loaded_elevator(at: u32, ends: &[u32]) -> (Elevator, Vec<Floor>, PassengerStore) {
        let mut fl = floors(20);
        let mut store = PassengerStore::new();
        let mut delivered = vec![];
        let mut e = elevator(1);

        // Walk the empty car up to `at` by queueing a marker passenger there.
        if at > 0 {
            let marker = arrive(&mut store, &mut fl, at, at, 0);
            let mut t = 0;
            while e.current_floor() != FloorId(at) || e.state() != ElevatorState::Stopped {
                step(&mut e, t, &mut fl, &mut store, &mut delivered);
                t += 1;
            }
            // The Stopped update boards the marker; the next one drops it off.
            step(&mut e, t, &mut fl, &mut store, &mut delivered);
            step(&mut e, t + 1, &mut fl, &mut store, &mut delivered);
            assert_eq!(delivered, vec![marker]);
        }
        for &end in ends {
            let id = store.insert(FloorId(at), FloorId(end), Tick(0));
            fl[at as usize].add_passenger(id);
        }
        let here = at as usize;
        let mut sink = vec![];
        e.update(Tick(100), &mut fl, &mut store, &mut sink, &Stay);
        assert_eq!(fl[here].waiting_count(), 0);
        (e, fl, store)
    }

    /// Policy that never moves the car, used to set up boarded state.
    struct Stay;

    impl DispatchPolicy for Stay {
        fn next_target(&self, e: &Elevator, _: &[Floor], _: &PassengerStore) -> FloorId {
            e.current_floor()
        }
    }

    #[test]
    fn stopped_car_picks_nearest_destination() {
        let (e, fl, store) = loaded_elevator(10, &[16, 7, 13]);
        assert_eq!(NearestTargetDispatch.next_target(&e, &fl, &store), FloorId(7));
    }

    #[test]
    fn equal_distance_goes_to_first_boarded() {
        let (e, fl, store) = loaded_elevator(10, &[13, 7]);
        assert_eq!(NearestTargetDispatch.next_target(&e, &fl, &store), FloorId(13));
    }

    #[test]
    fn moving_up_ignores_destinations_behind() {
        let (mut e, fl, store) = loaded_elevator(10, &[9, 15, 12]);
        e.force_state(ElevatorState::MovingUp);
        assert_eq!(NearestTargetDispatch.next_target(&e, &fl, &store), FloorId(12));
    }

    #[test]
    fn moving_down_ignores_destinations_behind() {
        let (mut e, fl, store) = loaded_elevator(10, &[11, 4, 8]);
        e.force_state(ElevatorState::MovingDown);
        assert_eq!(NearestTargetDispatch.next_target(&e, &fl, &store), FloorId(8));
    }

    #[test]
    fn no_destination_ahead_falls_back_to_first_boarded() {
        let (mut e, fl, store) = loaded_elevator(10, &[6, 3]);
        e.force_state(ElevatorState::MovingUp);
        assert_eq!(NearestTargetDispatch.next_target(&e, &fl, &store), FloorId(6));
    }

    #[test]
    fn loaded_car_ignores_waiting_floors() {
        let (e, mut fl, store) = loaded_elevator(0, &[9]);
        fl[1].add_passenger(PassengerId(99));
        assert_eq!(NearestTargetDispatch.next_target(&e, &fl, &store), FloorId(9));
    }
}
