//! Core domain logic for daynote, a one-note-per-day image viewer.
//! This crate owns date-key resolution, range clamping, the missing-asset
//! fallback walk, and the archive listing; presentation layers stay thin.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ViewerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::day::{DateKey, DateKeyParseError};
pub use model::note_ref::{parse_note_ext, NoteExt, NoteReference};
pub use service::resolver::{
    enumerate_range, resolve, resolve_available, Resolution, ResolveError, ResolveResult,
};
pub use service::viewer::{ArchiveEntry, LoadApplied, LoadOutcome, NoteView, ViewerService};
pub use store::{DirNoteStore, NoteAsset, NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
