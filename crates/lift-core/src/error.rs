//! Simulator error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::FloorId;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor {floor} is outside the building (0..{floor_count})")]
    FloorOutOfRange { floor: FloorId, floor_count: u32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
