//! Date-note resolution: clamping, range enumeration and the fallback walk.
//!
//! # Responsibility
//! - Map a requested day onto the day/reference pair to display.
//! - Define the backward fallback policy applied when a day has no asset.
//!
//! # Invariants
//! - Requests below the configured start clamp up to it; no other request is
//!   rewritten.
//! - The fallback walk strictly decreases one day per step, never revisits a
//!   day, and never goes below the configured start.

use crate::config::ViewerConfig;
use crate::model::day::DateKey;
use crate::model::note_ref::NoteReference;
use crate::store::{NoteStore, StoreError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Resolution/navigation error surfaced to the presentation layer.
#[derive(Debug)]
pub enum ResolveError {
    /// No asset exists for `key` or any earlier day down to the start.
    ///
    /// `key` is the configured start day, the hard boundary of the walk.
    /// This is the only user-visible failure state.
    NoteMissing { key: DateKey },
    /// Store transport failure. Not absorbed by the fallback walk.
    Store(StoreError),
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteMissing { key } => write!(f, "no note uploaded for {key} yet"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoteMissing { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ResolveError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Missing { key } => Self::NoteMissing { key },
            other => Self::Store(other),
        }
    }
}

/// Outcome of resolving one requested day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The day that will be displayed.
    pub key: DateKey,
    /// Asset reference composed for `key`.
    pub reference: NoteReference,
    /// Whether `key` is the invocation-time local day. Callers use this to
    /// disable forward navigation; the resolver never clamps upward.
    pub is_today: bool,
}

/// Resolves one requested day against the configured range.
///
/// Pure function of its inputs: clamps below-start requests up to the start,
/// composes the asset reference, and flags whether the day is `today`.
pub fn resolve(config: &ViewerConfig, today: DateKey, requested: DateKey) -> Resolution {
    let key = if requested < config.start_date {
        config.start_date
    } else {
        requested
    };

    Resolution {
        key,
        reference: config.reference_for(key),
        is_today: key == today,
    }
}

/// Enumerates every day from `start` to `end` inclusive, ascending.
///
/// Empty when `start > end`. Recomputed per call, never cached.
pub fn enumerate_range(start: DateKey, end: DateKey) -> Vec<DateKey> {
    let mut keys = Vec::new();
    let mut day = start;
    while day <= end {
        keys.push(day);
        match day.succ() {
            Some(next) => day = next,
            None => break,
        }
    }
    keys
}

/// Resolves the newest available day at or before the request.
///
/// Clamps like [`resolve`], then walks strictly backward one day at a time
/// while the store has no asset, stopping at the first day that has one.
/// The walk is a bounded loop over the reversed valid range: it takes at most
/// `(key - start_date)` steps and never revisits a day.
///
/// # Errors
/// - `ResolveError::NoteMissing` when every day down to and including the
///   configured start has no asset. Carries the start key.
/// - `ResolveError::Store` when a probe fails for transport reasons; the walk
///   does not absorb real I/O faults.
pub fn resolve_available<S: NoteStore>(
    store: &S,
    config: &ViewerConfig,
    today: DateKey,
    requested: DateKey,
) -> ResolveResult<Resolution> {
    let first = resolve(config, today, requested);

    for key in enumerate_range(config.start_date, first.key).into_iter().rev() {
        let candidate = resolve(config, today, key);
        if store.exists(&candidate.reference).map_err(ResolveError::Store)? {
            if key != first.key {
                debug!(
                    "event=note_fallback module=resolver status=ok requested={} displayed={}",
                    first.key, key
                );
            }
            return Ok(candidate);
        }
    }

    warn!(
        "event=note_fallback module=resolver status=exhausted requested={} start={}",
        first.key, config.start_date
    );
    Err(ResolveError::NoteMissing {
        key: config.start_date,
    })
}

#[cfg(test)]
mod tests {
    use super::{enumerate_range, resolve};
    use crate::config::ViewerConfig;
    use crate::model::day::DateKey;
    use crate::model::note_ref::NoteExt;
    use std::str::FromStr;

    fn key(value: &str) -> DateKey {
        DateKey::from_str(value).unwrap()
    }

    fn config() -> ViewerConfig {
        ViewerConfig {
            start_date: key("2026-02-19"),
            notes_folder: "notes".to_string(),
            ext: NoteExt::Png,
        }
    }

    #[test]
    fn clamps_below_start_up_to_start() {
        let resolution = resolve(&config(), key("2026-03-01"), key("2025-12-31"));
        assert_eq!(resolution.key, key("2026-02-19"));
        assert_eq!(resolution.reference.relative_path, "notes/2026-02-19.png");
        assert!(!resolution.is_today);
    }

    #[test]
    fn passes_in_range_requests_through() {
        let resolution = resolve(&config(), key("2026-03-01"), key("2026-02-25"));
        assert_eq!(resolution.key, key("2026-02-25"));
    }

    #[test]
    fn flags_today_only_on_exact_match() {
        let today = key("2026-03-01");
        assert!(resolve(&config(), today, today).is_today);
        assert!(!resolve(&config(), today, key("2026-02-28")).is_today);
    }

    #[test]
    fn enumerate_range_is_inclusive_and_ordered() {
        let keys = enumerate_range(key("2026-02-27"), key("2026-03-02"));
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            rendered,
            ["2026-02-27", "2026-02-28", "2026-03-01", "2026-03-02"]
        );
    }

    #[test]
    fn enumerate_range_is_empty_when_inverted() {
        assert!(enumerate_range(key("2026-03-02"), key("2026-03-01")).is_empty());
    }

    #[test]
    fn enumerate_single_day_range() {
        let keys = enumerate_range(key("2026-03-01"), key("2026-03-01"));
        assert_eq!(keys, vec![key("2026-03-01")]);
    }
}
