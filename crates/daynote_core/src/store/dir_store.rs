//! Directory-backed note store.
//!
//! # Responsibility
//! - Serve note assets from a static directory tree.
//! - Map filesystem not-found onto the store's clean missing signal.
//! - Scan the notes folder for days that follow the naming convention.
//!
//! # Invariants
//! - An absent notes folder means "no notes yet", not an error.
//! - Scan results are ascending and contain only real calendar days.

use crate::config::ViewerConfig;
use crate::model::day::DateKey;
use crate::model::note_ref::{NoteExt, NoteReference};
use crate::store::{NoteAsset, StoreError, StoreResult};
use log::{error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

static NOTE_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})\.([a-z0-9]+)$").expect("valid note file regex"));

/// Note store over a static directory served as the asset root.
#[derive(Debug)]
pub struct DirNoteStore {
    root: PathBuf,
    notes_dir: PathBuf,
    ext: NoteExt,
}

impl DirNoteStore {
    /// Opens a store rooted at `root` using the folder/extension from config.
    ///
    /// # Errors
    /// - `StoreError::InvalidRoot` when `root` is absent or not a directory.
    ///
    /// # Side effects
    /// - Emits a `store_open` logging event.
    pub fn open(root: impl Into<PathBuf>, config: &ViewerConfig) -> StoreResult<Self> {
        let root = root.into();
        match std::fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                error!(
                    "event=store_open module=store status=error error_code=root_not_directory root={}",
                    root.display()
                );
                return Err(StoreError::InvalidRoot(root));
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                error!(
                    "event=store_open module=store status=error error_code=root_missing root={}",
                    root.display()
                );
                return Err(StoreError::InvalidRoot(root));
            }
            Err(err) => {
                return Err(StoreError::Io {
                    path: root,
                    source: err,
                });
            }
        }

        let notes_dir = root.join(config.notes_folder.trim());
        info!(
            "event=store_open module=store status=ok root={} notes_dir={}",
            root.display(),
            notes_dir.display()
        );

        Ok(Self {
            root,
            notes_dir,
            ext: config.ext,
        })
    }

    fn asset_path(&self, reference: &NoteReference) -> PathBuf {
        self.root.join(&reference.relative_path)
    }
}

impl super::NoteStore for DirNoteStore {
    fn exists(&self, reference: &NoteReference) -> StoreResult<bool> {
        let path = self.asset_path(reference);
        match std::fs::metadata(&path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(StoreError::Io { path, source: err }),
        }
    }

    fn fetch(&self, reference: &NoteReference) -> StoreResult<NoteAsset> {
        let started_at = Instant::now();
        let path = self.asset_path(reference);

        match std::fs::read(&path) {
            Ok(bytes) => {
                info!(
                    "event=note_fetch module=store status=ok key={} bytes={} duration_ms={}",
                    reference.key,
                    bytes.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(NoteAsset {
                    reference: reference.clone(),
                    bytes,
                })
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "event=note_fetch module=store status=missing key={} duration_ms={}",
                    reference.key,
                    started_at.elapsed().as_millis()
                );
                Err(StoreError::Missing { key: reference.key })
            }
            Err(err) => {
                error!(
                    "event=note_fetch module=store status=error key={} duration_ms={} error={}",
                    reference.key,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StoreError::Io { path, source: err })
            }
        }
    }

    fn scan_keys(&self) -> StoreResult<Vec<DateKey>> {
        let entries = match std::fs::read_dir(&self.notes_dir) {
            Ok(entries) => entries,
            // The author simply has not uploaded anything yet.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.notes_dir.clone(),
                    source: err,
                });
            }
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| StoreError::Io {
                path: self.notes_dir.clone(),
                source: err,
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let file_type = entry.file_type().map_err(|err| StoreError::Io {
                path: entry.path(),
                source: err,
            })?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(key) = parse_note_filename(name, self.ext) {
                keys.push(key);
            }
        }

        keys.sort_unstable();
        info!(
            "event=store_scan module=store status=ok notes_dir={} count={}",
            self.notes_dir.display(),
            keys.len()
        );
        Ok(keys)
    }
}

/// Extracts the day key from one conventional note filename.
///
/// Returns `None` for names outside the `{YYYY-MM-DD}.{ext}` convention,
/// for extensions other than the configured one, and for digit shapes that
/// name impossible dates.
fn parse_note_filename(name: &str, ext: NoteExt) -> Option<DateKey> {
    let captures = NOTE_FILE_RE.captures(name)?;
    if &captures[2] != ext.as_str() {
        return None;
    }
    DateKey::from_str(&captures[1]).ok()
}
