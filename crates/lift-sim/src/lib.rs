//! `lift-sim` — the tick loop driver for the lift simulator.
//!
//! # Tick loop
//!
//! ```text
//! while now < config.max_ticks and some passenger is unresolved:
//!   ① Inject   — every manifest passenger with requested_at == now is
//!                queued on its start floor (out-of-range floors: rejected).
//!   ② Update   — Elevator::update for each elevator in ascending id order.
//!   ③ Sweep    — every Stopped elevator delivers boarded passengers whose
//!                destination is its current floor.
//!   ④ Advance  — now += 1.
//! ```
//!
//! The order is fixed and observable: injection precedes all updates, and a
//! lower elevator id always acts first.  This is what decides which car wins
//! a race to the same floor, and it keeps every run bit-for-bit reproducible.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_building::NearestTargetDispatch;
//! use lift_core::SimConfig;
//! use lift_manifest::load_manifest_csv;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let manifest = load_manifest_csv(Path::new("Elevators.csv"))?;
//! let mut sim = SimBuilder::new(SimConfig::with_floor_travel_ticks(10), NearestTargetDispatch)
//!     .manifest(manifest)
//!     .build()?;
//! let report = sim.run(&mut NoopObserver);
//! println!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{Delta, Reduction, SimReport, TickSummary};
pub use sim::Sim;
