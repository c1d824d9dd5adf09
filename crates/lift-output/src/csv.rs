//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `elevator_snapshots.csv`
//! - `passengers.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, PassengerRow, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries:  Writer<File>,
    snapshots:  Writer<File>,
    passengers: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "elapsed_secs",
            "arrived",
            "rejected",
            "boarded",
            "delivered",
            "total_delivered",
            "waiting",
        ])?;

        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record(["tick", "elevator_id", "floor", "state", "passengers", "target_floor"])?;

        let mut passengers = Writer::from_path(dir.join("passengers.csv"))?;
        passengers.write_record([
            "passenger_id",
            "requested_at",
            "start_floor",
            "end_floor",
            "picked_up_at",
            "delivered_at",
            "wait",
            "travel",
        ])?;

        Ok(Self {
            summaries,
            snapshots,
            passengers,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.arrived.to_string(),
            row.rejected.to_string(),
            row.boarded.to_string(),
            row.delivered.to_string(),
            row.total_delivered.to_string(),
            row.waiting.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elevator_id.to_string(),
                row.floor.to_string(),
                row.state.to_owned(),
                row.passengers.to_string(),
                row.target_floor.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_passenger(&mut self, row: &PassengerRow) -> OutputResult<()> {
        self.passengers.write_record(&[
            row.passenger_id.to_string(),
            row.requested_at.to_string(),
            row.start_floor.to_string(),
            row.end_floor.to_string(),
            row.picked_up_at.to_string(),
            row.delivered_at.to_string(),
            row.wait.to_string(),
            row.travel.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        self.passengers.flush()?;
        Ok(())
    }
}
