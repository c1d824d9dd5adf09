//! Plain data row types written by output backends.
//!
//! Floor numbers are 1-indexed.

use lift_building::{Elevator, Passenger};
use lift_core::Tick;
use lift_sim::TickSummary;

/// Counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub elapsed_secs:    u64,
    pub arrived:         u64,
    pub rejected:        u64,
    pub boarded:         u64,
    pub delivered:       u64,
    pub total_delivered: u64,
    pub waiting:         u64,
}

impl TickSummaryRow {
    pub fn new(summary: &TickSummary, tick_duration_secs: u32) -> Self {
        Self {
            tick:            summary.tick.0,
            elapsed_secs:    summary.tick.0 * tick_duration_secs as u64,
            arrived:         summary.arrived as u64,
            rejected:        summary.rejected as u64,
            boarded:         summary.boarded as u64,
            delivered:       summary.delivered as u64,
            total_delivered: summary.total_delivered as u64,
            waiting:         summary.waiting as u64,
        }
    }
}

/// One elevator's position and load at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:         u64,
    pub elevator_id:  u16,
    pub floor:        u32,
    /// `STOPPED`, `STOPPING`, `MOVING_UP` or `MOVING_DOWN`.
    pub state:        &'static str,
    pub passengers:   u32,
    pub target_floor: u32,
}

impl ElevatorSnapshotRow {
    pub fn new(tick: Tick, elevator: &Elevator) -> Self {
        Self {
            tick:         tick.0,
            elevator_id:  elevator.id().0,
            floor:        elevator.current_floor().number(),
            state:        elevator.state().as_str(),
            passengers:   elevator.passenger_count() as u32,
            target_floor: elevator.target_floor().number(),
        }
    }
}

/// The full journey of one delivered passenger, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerRow {
    pub passenger_id: u32,
    pub requested_at: u64,
    pub start_floor:  u32,
    pub end_floor:    u32,
    pub picked_up_at: u64,
    pub delivered_at: u64,
    pub wait:         u64,
    pub travel:       u64,
}

impl PassengerRow {
    /// `None` unless the passenger has been delivered.
    pub fn from_delivered(passenger: &Passenger) -> Option<Self> {
        let picked_up_at = passenger.picked_up_at()?;
        let delivered_at = passenger.delivered_at()?;
        Some(Self {
            passenger_id: passenger.id.0,
            requested_at: passenger.requested_at.0,
            start_floor:  passenger.start_floor.number(),
            end_floor:    passenger.end_floor.number(),
            picked_up_at: picked_up_at.0,
            delivered_at: delivered_at.0,
            wait:         picked_up_at.since(passenger.requested_at),
            travel:       delivered_at.since(picked_up_at),
        })
    }
}
