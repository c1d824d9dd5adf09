//! Dispatch policies: choosing an elevator's next target floor.
//!
//! A policy is consulted only from the `Stopped` branch of
//! [`Elevator::update`], after drop-off and boarding.  Returning the
//! elevator's current floor means "stay idle".

use lift_core::FloorId;

use crate::{Elevator, ElevatorState, Floor, PassengerStore};

/// Picks the floor an elevator should head to next.
///
/// Implementations must be deterministic: the simulation's output is only
/// reproducible if the same inputs always yield the same target.
pub trait DispatchPolicy {
    fn next_target(
        &self,
        elevator:   &Elevator,
        floors:     &[Floor],
        passengers: &PassengerStore,
    ) -> FloorId;
}

/// Greedy, uncoordinated nearest-target dispatch.
///
/// - **Empty car**: the nearest floor with waiting passengers; ties go to
///   the lowest floor.  No waiting passengers anywhere → stay put.
/// - **Loaded car**: the nearest boarded destination, restricted to
///   destinations ahead of the car while moving.  Ties go to the passenger
///   who boarded first.  If nothing qualifies, the first boarded passenger's
///   destination.
///
/// Elevators do not coordinate: several idle cars may chase the same floor,
/// and whichever arrives and stops first empties it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestTargetDispatch;

impl DispatchPolicy for NearestTargetDispatch {
    fn next_target(
        &self,
        elevator:   &Elevator,
        floors:     &[Floor],
        passengers: &PassengerStore,
    ) -> FloorId {
        if elevator.boarded().is_empty() {
            nearest_waiting_floor(elevator.current_floor(), floors)
        } else {
            nearest_destination(elevator, passengers)
        }
    }
}

/// The closest floor with a non-empty queue, or `current` if there is none.
pub fn nearest_waiting_floor(current: FloorId, floors: &[Floor]) -> FloorId {
    let mut best = current;
    let mut min_distance = u32::MAX;
    for floor in floors.iter().filter(|f| f.has_waiting_passengers()) {
        let distance = floor.number().distance(current);
        if distance < min_distance {
            min_distance = distance;
            best = floor.number();
        }
    }
    best
}

fn nearest_destination(elevator: &Elevator, passengers: &PassengerStore) -> FloorId {
    let current = elevator.current_floor();
    let state = elevator.state();

    let mut best: Option<(u32, FloorId)> = None;
    for &id in elevator.boarded() {
        let end = passengers.get(id).end_floor;
        let ahead = match state {
            ElevatorState::MovingUp   => end > current,
            ElevatorState::MovingDown => end < current,
            ElevatorState::Stopped    => true,
            ElevatorState::Stopping   => false,
        };
        if !ahead {
            continue;
        }
        let distance = end.distance(current);
        if best.is_none_or(|(min, _)| distance < min) {
            best = Some((distance, end));
        }
    }

    match best {
        Some((_, floor)) if floor != current => floor,
        _ => elevator
            .boarded()
            .first()
            .map(|&id| passengers.get(id).end_floor)
            .unwrap_or(current),
    }
}
