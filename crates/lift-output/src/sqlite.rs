//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `tick_summaries`, `elevator_snapshots` and `passengers`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, PassengerRow, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick            INTEGER PRIMARY KEY,
                 elapsed_secs    INTEGER NOT NULL,
                 arrived         INTEGER NOT NULL,
                 rejected        INTEGER NOT NULL,
                 boarded         INTEGER NOT NULL,
                 delivered       INTEGER NOT NULL,
                 total_delivered INTEGER NOT NULL,
                 waiting         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS elevator_snapshots (
                 tick         INTEGER NOT NULL,
                 elevator_id  INTEGER NOT NULL,
                 floor        INTEGER NOT NULL,
                 state        TEXT    NOT NULL,
                 passengers   INTEGER NOT NULL,
                 target_floor INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS passengers (
                 passenger_id INTEGER PRIMARY KEY,
                 requested_at INTEGER NOT NULL,
                 start_floor  INTEGER NOT NULL,
                 end_floor    INTEGER NOT NULL,
                 picked_up_at INTEGER NOT NULL,
                 delivered_at INTEGER NOT NULL,
                 wait         INTEGER NOT NULL,
                 travel       INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, elapsed_secs, arrived, rejected, boarded, delivered, total_delivered, waiting) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.tick,
                row.elapsed_secs,
                row.arrived,
                row.rejected,
                row.boarded,
                row.delivered,
                row.total_delivered,
                row.waiting,
            ],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO elevator_snapshots \
                 (tick, elevator_id, floor, state, passengers, target_floor) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.elevator_id,
                    row.floor,
                    row.state,
                    row.passengers,
                    row.target_floor,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_passenger(&mut self, row: &PassengerRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO passengers \
             (passenger_id, requested_at, start_floor, end_floor, picked_up_at, delivered_at, wait, travel) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.passenger_id,
                row.requested_at,
                row.start_floor,
                row.end_floor,
                row.picked_up_at,
                row.delivered_at,
                row.wait,
                row.travel,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
