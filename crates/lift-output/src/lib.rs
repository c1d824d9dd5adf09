//! `lift-output` — simulation output writers for the lift simulator.
//!
//! Two backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                                                   |
//! |-----------|---------|-----------------------------------------------------------------|
//! | *(none)*  | CSV     | `tick_summaries.csv`, `elevator_snapshots.csv`, `passengers.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                     |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `lift_sim::SimObserver`.  Floor numbers in every output
//! row are 1-indexed, matching the manifest.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ElevatorSnapshotRow, PassengerRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
