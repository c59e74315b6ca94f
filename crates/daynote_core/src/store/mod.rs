//! Asset store contract for daily note images.
//!
//! # Responsibility
//! - Define the storage-agnostic fetch/probe/scan contract the viewer and
//!   fallback walk run against.
//! - Keep filesystem details inside the store boundary.
//!
//! # Invariants
//! - A clean not-found signal is `StoreError::Missing`, never a generic I/O
//!   error; only `Missing` triggers the fallback walk.

use crate::model::day::DateKey;
use crate::model::note_ref::NoteReference;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod dir_store;

pub use dir_store::DirNoteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for probe, fetch and scan operations.
#[derive(Debug)]
pub enum StoreError {
    /// No asset exists for the given day. Recoverable via fallback.
    Missing { key: DateKey },
    /// Asset root is unusable (absent or not a directory).
    InvalidRoot(PathBuf),
    /// Transport-level failure touching one path.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "no note asset stored for {key}"),
            Self::InvalidRoot(path) => {
                write!(f, "asset root is not a usable directory: {}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "store i/o failure at {}: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Missing { .. } | Self::InvalidRoot(_) => None,
        }
    }
}

/// One fetched note asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteAsset {
    /// The reference the bytes were fetched for.
    pub reference: NoteReference,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

/// Storage contract for note assets.
///
/// Implementations map a `NoteReference` onto their own addressing scheme and
/// report absence as `StoreError::Missing`.
pub trait NoteStore {
    /// Cheap existence probe for one reference.
    fn exists(&self, reference: &NoteReference) -> StoreResult<bool>;

    /// Fetches the asset bytes for one reference.
    ///
    /// # Errors
    /// - `StoreError::Missing` when no asset is stored for the day.
    fn fetch(&self, reference: &NoteReference) -> StoreResult<NoteAsset>;

    /// Lists the days that actually have an asset stored, ascending.
    ///
    /// Files not following the `{key}.{ext}` naming convention are skipped.
    fn scan_keys(&self) -> StoreResult<Vec<DateKey>>;
}
