//! `lift-core` — foundational types for the `lift` elevator dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only `thiserror` (plus optional `serde`) from
//! outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ElevatorId`, `FloorId`                |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig` and the reference building constants      |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    BUILDING_FLOORS, ELEVATOR_COUNT, MAX_CAPACITY, SIMULATION_END_TICK, STOP_DURATION_TICKS,
    SimConfig,
};
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, FloorId, PassengerId};
pub use time::{SimClock, Tick};
