//! CSV manifest loader.
//!
//! # CSV format
//!
//! The first line is a header and is skipped whatever it says.  Every other
//! row carries three integers; extra columns are ignored.
//!
//! ```csv
//! time,start_floor,end_floor
//! 0,1,10
//! 0,5,2
//! 12,40,1
//! ```
//!
//! Floors are 1-indexed in the file and 0-indexed in the returned
//! [`ArrivalRecord`]s.  Floors above the building's top floor are not
//! checked here; the loader does not know the building size, so the
//! simulation rejects those at injection time.
//!
//! Rows are returned in file order.  Passenger ids are later assigned in
//! this order, so keep the file order meaningful.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::{ArrivalRecord, Manifest, ManifestError, ManifestResult};

/// `(requested_time, start_floor, end_floor)` exactly as written in the file.
type RawArrival = (i64, i64, i64);

/// Load a manifest from a CSV file.
///
/// # Errors
///
/// [`ManifestError::Open`] if the file cannot be opened.  The caller cannot
/// run a simulation without its manifest, so this is fatal.
pub fn load_manifest_csv(path: &Path) -> ManifestResult<Manifest> {
    let file = File::open(path).map_err(|source| ManifestError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_manifest_reader(file)
}

/// Like [`load_manifest_csv`] but accepts any `Read` source.
pub fn load_manifest_reader<R: Read>(reader: R) -> ManifestResult<Manifest> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut manifest = Manifest::default();
    let mut row = StringRecord::new();

    loop {
        match csv_reader.read_record(&mut row) {
            Ok(false) => break,
            Ok(true) => match parse_row(&row) {
                Ok(record) => manifest.records.push(record),
                Err(reason) => {
                    let line = row.position().map_or(0, |p| p.line());
                    warn!(line, row = ?row, %reason, "skipping manifest row");
                    manifest.skipped += 1;
                }
            },
            Err(e) if e.is_io_error() => return Err(ManifestError::Csv(e)),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                warn!(line, error = %e, "skipping unreadable manifest row");
                manifest.skipped += 1;
            }
        }
    }

    info!(
        loaded = manifest.records.len(),
        skipped = manifest.skipped,
        "loaded passenger manifest"
    );
    Ok(manifest)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_row(row: &StringRecord) -> Result<ArrivalRecord, String> {
    if row.len() < 3 {
        return Err(format!("expected 3 fields, found {}", row.len()));
    }
    let fields: StringRecord = row.iter().take(3).collect();
    let (time, start, end): RawArrival = fields
        .deserialize(None)
        .map_err(|e| format!("non-numeric field: {e}"))?;

    let time = u64::try_from(time).map_err(|_| format!("negative request time {time}"))?;
    let start = floor_number(start)?;
    let end = floor_number(end)?;

    ArrivalRecord::from_manifest(time, start, end)
        .ok_or_else(|| format!("floor numbers start at 1, got {start} -> {end}"))
}

fn floor_number(n: i64) -> Result<u32, String> {
    u32::try_from(n).map_err(|_| format!("floor {n} is out of range"))
}
