//! Arrival records as handed to the simulation.

use lift_core::{FloorId, Tick};

/// One passenger request, already converted to 0-indexed floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalRecord {
    /// Tick at which the passenger appears on `start_floor`.
    pub requested_at: Tick,
    pub start_floor:  FloorId,
    pub end_floor:    FloorId,
}

impl ArrivalRecord {
    /// Build a record from manifest (1-indexed) floor numbers.
    ///
    /// Returns `None` if either floor is below 1.
    pub fn from_manifest(requested_at: u64, start_floor: u32, end_floor: u32) -> Option<Self> {
        Some(Self {
            requested_at: Tick(requested_at),
            start_floor:  FloorId(start_floor.checked_sub(1)?),
            end_floor:    FloorId(end_floor.checked_sub(1)?),
        })
    }
}

/// The records loaded from one manifest, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub records: Vec<ArrivalRecord>,
    /// Rows dropped because they could not be parsed or named an invalid floor.
    pub skipped: usize,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
