//! `lift-building` — the entities that live inside the building.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`passenger`] | `Passenger`, `PassengerStore` (arena indexed by `PassengerId`) |
//! | [`floor`]     | `Floor`, a FIFO queue of waiting `PassengerId`s                |
//! | [`elevator`]  | `Elevator`, `ElevatorState`, `UpdateOutcome`                  |
//! | [`dispatch`]  | `DispatchPolicy` trait, `NearestTargetDispatch`               |
//!
//! # Ownership model
//!
//! Passengers live in a single `PassengerStore` owned by the simulation.
//! Floors and elevators hold `PassengerId`s only, so "moving" a passenger
//! from a floor queue into a car and then into the delivered list is an
//! index transfer.  At any moment an id is held by at most one container.

pub mod dispatch;
pub mod elevator;
pub mod floor;
pub mod passenger;

#[cfg(test)]
mod tests;

pub use dispatch::{DispatchPolicy, NearestTargetDispatch};
pub use elevator::{Elevator, ElevatorState, UpdateOutcome};
pub use floor::Floor;
pub use passenger::{Passenger, PassengerStore};
