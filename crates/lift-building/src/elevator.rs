//! The per-elevator state machine.
//!
//! # States
//!
//! ```text
//!   Stopped ──(target above/below)──▶ MovingUp / MovingDown
//!      ▲                                     │
//!      │                     (arrived at a floor with a drop-off
//!      │                      or a waiting passenger)
//!      │                                     ▼
//!      └──────(stop_duration_ticks)────── Stopping
//! ```
//!
//! `update` is called exactly once per tick.  Moving and stopping advance by
//! one timer unit per call; the `Stopped` branch drops off, boards as many
//! waiting passengers as capacity allows, and dispatches, all in one call.

use std::fmt;

use lift_core::{ElevatorId, FloorId, PassengerId, SimConfig, Tick};
use tracing::{trace, warn};

use crate::{DispatchPolicy, Floor, PassengerStore};

// ── ElevatorState ─────────────────────────────────────────────────────────────

/// Motion state of one elevator.  There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElevatorState {
    /// Doors open at `current_floor`: drop off, board, dispatch.
    #[default]
    Stopped,
    /// Decelerating / doors opening.  Becomes `Stopped` after the dwell.
    Stopping,
    MovingUp,
    MovingDown,
}

impl ElevatorState {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorState::Stopped    => "STOPPED",
            ElevatorState::Stopping   => "STOPPING",
            ElevatorState::MovingUp   => "MOVING_UP",
            ElevatorState::MovingDown => "MOVING_DOWN",
        }
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── UpdateOutcome ─────────────────────────────────────────────────────────────

/// Passenger movements caused by one `Elevator::update` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub boarded:   usize,
    pub delivered: usize,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// Created at floor 0 in `Stopped` and kept for the whole run.  The boarded
/// list never exceeds `capacity`.
#[derive(Debug, Clone)]
pub struct Elevator {
    id:                  ElevatorId,
    current_floor:       FloorId,
    /// Last dispatch decision.  Informational only; moving elevators do not
    /// re-read it.
    target_floor:        FloorId,
    state:               ElevatorState,
    stopping_timer:      u32,
    moving_timer:        u32,
    floor_travel_ticks:  u32,
    stop_duration_ticks: u32,
    capacity:            usize,
    boarded:             Vec<PassengerId>,
}

impl Elevator {
    pub fn new(
        id:                  ElevatorId,
        floor_travel_ticks:  u32,
        stop_duration_ticks: u32,
        capacity:            usize,
    ) -> Self {
        Self {
            id,
            current_floor: FloorId(0),
            target_floor: FloorId(0),
            state: ElevatorState::Stopped,
            stopping_timer: 0,
            moving_timer: 0,
            floor_travel_ticks,
            stop_duration_ticks,
            capacity,
            boarded: Vec::with_capacity(capacity),
        }
    }

    /// An elevator using the travel time, dwell and capacity from `config`.
    pub fn from_config(id: ElevatorId, config: &SimConfig) -> Self {
        Self::new(id, config.floor_travel_ticks, config.stop_duration_ticks, config.capacity)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> FloorId {
        self.current_floor
    }

    #[inline]
    pub fn target_floor(&self) -> FloorId {
        self.target_floor
    }

    #[inline]
    pub fn state(&self) -> ElevatorState {
        self.state
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Boarded passengers in boarding order.
    #[inline]
    pub fn boarded(&self) -> &[PassengerId] {
        &self.boarded
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.boarded.len()
    }

    #[inline]
    pub fn can_pick_up(&self) -> bool {
        self.boarded.len() < self.capacity
    }

    /// `true` if any boarded passenger is travelling to `floor`.
    pub fn has_destination_at(&self, floor: FloorId, passengers: &PassengerStore) -> bool {
        self.boarded.iter().any(|&id| passengers.get(id).end_floor == floor)
    }

    // ── Tick update ───────────────────────────────────────────────────────

    /// Advance this elevator by one tick.
    ///
    /// Delivered passengers are stamped with `now` and pushed onto
    /// `delivered`; boarded passengers are popped from the current floor's
    /// queue and stamped with `now` as their pickup time.
    ///
    /// If `current_floor` is outside `floors` the tick is skipped.
    pub fn update<D: DispatchPolicy + ?Sized>(
        &mut self,
        now:        Tick,
        floors:     &mut [Floor],
        passengers: &mut PassengerStore,
        delivered:  &mut Vec<PassengerId>,
        policy:     &D,
    ) -> UpdateOutcome {
        if self.current_floor.index() >= floors.len() {
            return UpdateOutcome::default();
        }

        match self.state {
            ElevatorState::Stopped => {
                let here = self.current_floor.index();
                let delivered_count = self.drop_off(now, passengers, delivered);
                let boarded_count = self.board_waiting(now, &mut floors[here], passengers);

                let target = policy.next_target(self, floors, passengers);
                self.dispatch_to(target);

                UpdateOutcome {
                    boarded:   boarded_count,
                    delivered: delivered_count,
                }
            }
            ElevatorState::Stopping => {
                self.stopping_timer += 1;
                if self.stopping_timer >= self.stop_duration_ticks {
                    self.stopping_timer = 0;
                    self.set_state(ElevatorState::Stopped);
                }
                UpdateOutcome::default()
            }
            ElevatorState::MovingUp | ElevatorState::MovingDown => {
                self.moving_timer += 1;
                if self.moving_timer >= self.floor_travel_ticks {
                    self.moving_timer = 0;
                    self.move_one_floor(floors, passengers);
                }
                UpdateOutcome::default()
            }
        }
    }

    /// Deliver every boarded passenger whose destination is `current_floor`.
    ///
    /// Returns the number delivered.  Boarding order of the remaining
    /// passengers is preserved.
    pub fn drop_off(
        &mut self,
        now:        Tick,
        passengers: &mut PassengerStore,
        delivered:  &mut Vec<PassengerId>,
    ) -> usize {
        let here = self.current_floor;
        let before = self.boarded.len();
        self.boarded.retain(|&id| {
            let passenger = passengers.get_mut(id);
            if passenger.end_floor == here {
                passenger.mark_delivered(now);
                delivered.push(id);
                false
            } else {
                true
            }
        });
        before - self.boarded.len()
    }

    /// Board from `floor` until it is empty or the car is full.
    fn board_waiting(&mut self, now: Tick, floor: &mut Floor, passengers: &mut PassengerStore) -> usize {
        let mut count = 0;
        while self.can_pick_up() {
            let Some(id) = floor.next_passenger() else {
                break;
            };
            passengers.get_mut(id).mark_picked_up(now);
            self.boarded.push(id);
            count += 1;
        }
        count
    }

    fn dispatch_to(&mut self, target: FloorId) {
        self.target_floor = target;
        match target.cmp(&self.current_floor) {
            std::cmp::Ordering::Greater => {
                self.moving_timer = 0;
                self.set_state(ElevatorState::MovingUp);
            }
            std::cmp::Ordering::Less => {
                self.moving_timer = 0;
                self.set_state(ElevatorState::MovingDown);
            }
            std::cmp::Ordering::Equal => self.set_state(ElevatorState::Stopped),
        }
    }

    fn move_one_floor(&mut self, floors: &[Floor], passengers: &PassengerStore) {
        let next = match self.state {
            ElevatorState::MovingUp => self.current_floor.0.checked_add(1),
            _ => self.current_floor.0.checked_sub(1),
        }
        .map(FloorId)
        .filter(|f| f.index() < floors.len());

        let Some(next) = next else {
            // Ran off the building: clamp and force a stop.
            let clamped = if self.state == ElevatorState::MovingUp {
                FloorId(floors.len().saturating_sub(1) as u32)
            } else {
                FloorId(0)
            };
            warn!(
                elevator = self.id.0,
                floor = self.current_floor.0,
                state = %self.state,
                "elevator moved past the building bounds; clamping"
            );
            self.current_floor = clamped;
            self.set_state(ElevatorState::Stopped);
            return;
        };

        self.current_floor = next;
        if self.has_destination_at(next, passengers) || floors[next.index()].has_waiting_passengers() {
            self.stopping_timer = 0;
            self.set_state(ElevatorState::Stopping);
        }
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: ElevatorState) {
        self.state = state;
    }

    fn set_state(&mut self, state: ElevatorState) {
        if self.state != state {
            trace!(
                elevator = self.id.0,
                floor = self.current_floor.0,
                from = %self.state,
                to = %state,
                "state transition"
            );
        }
        self.state = state;
    }
}
