//! Viewer configuration and validation.
//!
//! # Responsibility
//! - Hold the load-time constants the resolver and store operate on.
//! - Validate embedding-layer input before any lookup runs.
//!
//! # Invariants
//! - `start_date` is immutable for the process lifetime.
//! - `notes_folder` is a plain path segment under the asset root, never an
//!   absolute path and never a traversal.

use crate::model::day::DateKey;
use crate::model::note_ref::{NoteExt, NoteReference};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Load-time viewer constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Earliest day accessible in the archive.
    pub start_date: DateKey,
    /// Folder notes are stored under, relative to the asset root.
    pub notes_folder: String,
    /// File type the author exports notes as.
    pub ext: NoteExt,
}

impl ViewerConfig {
    /// Validates declaration-level config invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let folder = self.notes_folder.trim();
        if folder.is_empty() {
            return Err(ConfigError::EmptyNotesFolder);
        }
        if Path::new(folder).is_absolute() {
            return Err(ConfigError::AbsoluteNotesFolder(folder.to_string()));
        }
        if folder.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(ConfigError::TraversalNotesFolder(folder.to_string()));
        }
        Ok(())
    }

    /// Composes the asset reference for one day under this config.
    pub fn reference_for(&self, key: DateKey) -> NoteReference {
        NoteReference::compose(self.notes_folder.trim(), key, self.ext)
    }
}

/// Config validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyNotesFolder,
    AbsoluteNotesFolder(String),
    TraversalNotesFolder(String),
    /// Extension string outside the supported `png`/`jpg` set.
    UnsupportedExtension(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNotesFolder => write!(f, "notes folder must not be empty"),
            Self::AbsoluteNotesFolder(value) => {
                write!(f, "notes folder must be relative, got `{value}`")
            }
            Self::TraversalNotesFolder(value) => {
                write!(f, "notes folder must not traverse upward: `{value}`")
            }
            Self::UnsupportedExtension(value) => {
                write!(f, "unsupported note extension `{value}`; expected png|jpg")
            }
        }
    }
}

impl Error for ConfigError {}
