//! `lift-manifest` — passenger arrival records and CSV loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`record`] | `ArrivalRecord`, `Manifest`                            |
//! | [`loader`] | `load_manifest_csv`, `load_manifest_reader`            |
//! | [`error`]  | `ManifestError`, `ManifestResult<T>`                   |
//!
//! A bad row never aborts a load: it is skipped with a `warn!` diagnostic and
//! counted in [`Manifest::skipped`].  Only an unreadable source is an error.

pub mod error;
pub mod loader;
pub mod record;


pub use error::{ManifestError, ManifestResult};
pub use loader::{load_manifest_csv, load_manifest_reader};
pub use record::{ArrivalRecord, Manifest};
