//! Simulation-wide configuration.
//!
//! The reference building is fixed at 100 floors, 4 elevators, 8 passengers
//! per car and a 2-tick door dwell.  Those values are the `Default` for
//! [`SimConfig`]; the only parameter that normally varies between runs is
//! `floor_travel_ticks`.

use crate::{FloorId, LiftError, LiftResult, SimClock};

/// Floors in the reference building.
pub const BUILDING_FLOORS: u32 = 100;

/// Elevators in the reference building.
pub const ELEVATOR_COUNT: u16 = 4;

/// Maximum boarded passengers per elevator.
pub const MAX_CAPACITY: usize = 8;

/// Ticks an elevator spends in `Stopping` before it is `Stopped`.
pub const STOP_DURATION_TICKS: u32 = 2;

/// Hard iteration cap for `Sim::run`.
pub const SIMULATION_END_TICK: u64 = 200_000;

/// Immutable configuration passed to the simulation at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of building levels.  Valid floors are `0..floor_count`.
    pub floor_count: u32,

    /// Number of elevators, all starting at floor 0.
    pub elevator_count: u16,

    /// Maximum boarded passengers per elevator.
    pub capacity: usize,

    /// Ticks spent in `Stopping` before the doors are open (`Stopped`).
    pub stop_duration_ticks: u32,

    /// Ticks needed to cross one floor.
    pub floor_travel_ticks: u32,

    /// `Sim::run` stops once the clock reaches this tick, even if passengers
    /// are still undelivered.
    pub max_ticks: u64,

    /// Real seconds represented by one tick.  Only affects reporting.
    pub tick_duration_secs: u32,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floor_count:           BUILDING_FLOORS,
            elevator_count:        ELEVATOR_COUNT,
            capacity:              MAX_CAPACITY,
            stop_duration_ticks:   STOP_DURATION_TICKS,
            floor_travel_ticks:    1,
            max_ticks:             SIMULATION_END_TICK,
            tick_duration_secs:    1,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The reference building with the given per-floor travel time.
    pub fn with_floor_travel_ticks(floor_travel_ticks: u32) -> Self {
        Self {
            floor_travel_ticks,
            ..Self::default()
        }
    }

    /// Reject configurations the elevator state machine cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count == 0 {
            return Err(LiftError::Config("floor_count must be at least 1".into()));
        }
        if self.elevator_count == 0 {
            return Err(LiftError::Config("elevator_count must be at least 1".into()));
        }
        if self.capacity == 0 {
            return Err(LiftError::Config("capacity must be at least 1".into()));
        }
        if self.floor_travel_ticks == 0 {
            return Err(LiftError::Config("floor_travel_ticks must be at least 1".into()));
        }
        if self.stop_duration_ticks == 0 {
            return Err(LiftError::Config("stop_duration_ticks must be at least 1".into()));
        }
        Ok(())
    }

    /// `Ok` if `floor` is inside the building.
    pub fn check_floor(&self, floor: FloorId) -> LiftResult<()> {
        if floor.0 < self.floor_count {
            Ok(())
        } else {
            Err(LiftError::FloorOutOfRange {
                floor,
                floor_count: self.floor_count,
            })
        }
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }
}
