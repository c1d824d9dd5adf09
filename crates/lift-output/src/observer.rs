//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_building::{Elevator, Floor, Passenger};
use lift_core::{SimConfig, Tick};
use lift_sim::{SimObserver, SimReport, TickSummary};
use tracing::error;

use crate::row::{ElevatorSnapshotRow, PassengerRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, elevator snapshots and
/// delivered passengers to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: u32,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for elapsed-time
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                error!(error = %e, "output write failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_delivery(&mut self, _tick: Tick, passenger: &Passenger) {
        if let Some(row) = PassengerRow::from_delivered(passenger) {
            let result = self.writer.write_passenger(&row);
            self.store_err(result);
        }
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow::new(summary, self.tick_duration_secs);
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, elevators: &[Elevator], _floors: &[Floor]) {
        let rows: Vec<ElevatorSnapshotRow> = elevators
            .iter()
            .map(|e| ElevatorSnapshotRow::new(tick, e))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _report: &SimReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
