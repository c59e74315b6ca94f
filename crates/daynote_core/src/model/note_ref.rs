//! Note asset reference and file-type naming.
//!
//! # Responsibility
//! - Define the closed set of supported note image extensions.
//! - Compose the deterministic `{folder}/{key}.{ext}` asset path.
//!
//! # Invariants
//! - The same (folder, key, extension) triple always composes the same path.
//! - Author uploads must follow this naming exactly to be found.

use crate::model::day::DateKey;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Supported note image file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteExt {
    Png,
    Jpg,
}

impl NoteExt {
    /// Returns the file-name extension segment without the dot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

/// Parses an extension string from the closed supported set.
pub fn parse_note_ext(value: &str) -> Option<NoteExt> {
    match value {
        "png" => Some(NoteExt::Png),
        "jpg" => Some(NoteExt::Jpg),
        _ => None,
    }
}

/// Resolved pointer to one note asset.
///
/// The path is relative to the asset root the store serves from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteReference {
    /// The day this reference was composed for.
    pub key: DateKey,
    /// Relative asset path, `{folder}/{key}.{ext}`.
    pub relative_path: String,
}

impl NoteReference {
    /// Composes the reference for one day under the given folder/extension.
    pub fn compose(folder: &str, key: DateKey, ext: NoteExt) -> Self {
        Self {
            key,
            relative_path: format!("{folder}/{key}.{}", ext.as_str()),
        }
    }
}

impl Display for NoteReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_note_ext, NoteExt, NoteReference};
    use crate::model::day::DateKey;
    use std::str::FromStr;

    #[test]
    fn composes_deterministic_relative_path() {
        let key = DateKey::from_str("2026-02-20").unwrap();
        let reference = NoteReference::compose("notes", key, NoteExt::Jpg);
        assert_eq!(reference.relative_path, "notes/2026-02-20.jpg");
        assert_eq!(reference.key, key);
    }

    #[test]
    fn parses_only_supported_extensions() {
        assert_eq!(parse_note_ext("png"), Some(NoteExt::Png));
        assert_eq!(parse_note_ext("jpg"), Some(NoteExt::Jpg));
        assert_eq!(parse_note_ext("jpeg"), None);
        assert_eq!(parse_note_ext("PNG"), None);
    }
}
