//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ElevatorSnapshotRow, OutputResult, PassengerRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never interrupt the simulation: [`SimOutputObserver`] stores the
/// first one, to be retrieved with
/// [`take_error`][crate::SimOutputObserver::take_error].
///
/// [`SimOutputObserver`]: crate::SimOutputObserver
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of elevator snapshots (one row per car).
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write the record of one delivered passenger.
    fn write_passenger(&mut self, row: &PassengerRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
