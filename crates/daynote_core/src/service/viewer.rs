//! Viewer use-case service and the single current-day state cell.
//!
//! # Responsibility
//! - Own the "current day" register and update it only through resolution.
//! - Apply navigation policy: back/forward stepping, today jump, and the
//!   deliberate refusal to ever navigate beyond today.
//! - Suppress stale asynchronous load results by day key.
//!
//! # Invariants
//! - `current` always lies in `[start_date, max(start_date, today)]`.
//! - A load result whose key no longer matches `current` is ignored.

use crate::clock::Clock;
use crate::config::ViewerConfig;
use crate::model::day::DateKey;
use crate::model::note_ref::NoteReference;
use crate::service::resolver::{
    enumerate_range, resolve_available, Resolution, ResolveError, ResolveResult,
};
use crate::store::{NoteAsset, NoteStore};
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// Everything the presentation layer needs to render one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    /// The day being displayed.
    pub key: DateKey,
    /// Asset reference to fetch and render.
    pub reference: NoteReference,
    /// Drives the "Today" badge and forward-control disablement.
    pub is_today: bool,
    /// Long-form date label for the title line.
    pub title: String,
}

impl NoteView {
    fn from_resolution(resolution: Resolution) -> Self {
        Self {
            title: resolution.key.long_label(),
            key: resolution.key,
            reference: resolution.reference,
            is_today: resolution.is_today,
        }
    }
}

/// One row of the archive listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub key: DateKey,
    pub reference: NoteReference,
    /// Whether the store currently holds an asset for this day.
    pub available: bool,
}

/// Presentation-layer report of one asynchronous asset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The asset was fetched and rendered.
    Loaded,
    /// The asset fetch came back not-found.
    Missing,
}

/// What applying a load result did to viewer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadApplied {
    /// The result was for a superseded request and changed nothing.
    Ignored,
    /// The current day's asset is displayed; state unchanged.
    Displayed,
    /// The current day had no asset; the viewer fell back to this view.
    FellBack(NoteView),
}

/// Viewer service over a note store and a clock.
///
/// Generic over both seams so resolution and navigation are testable with an
/// in-memory store and a pinned day.
pub struct ViewerService<S: NoteStore, C: Clock> {
    config: ViewerConfig,
    store: S,
    clock: C,
    current: DateKey,
}

impl<S: NoteStore, C: Clock> ViewerService<S, C> {
    /// Creates a viewer positioned on today, clamped up to the start day.
    pub fn new(config: ViewerConfig, store: S, clock: C) -> Self {
        let today = clock.today();
        let current = if today < config.start_date {
            config.start_date
        } else {
            today
        };
        Self {
            config,
            store,
            clock,
            current,
        }
    }

    /// Returns the day currently displayed.
    pub fn current_key(&self) -> DateKey {
        self.current
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Resolves and displays one requested day.
    ///
    /// Clamps below-start requests, walks the fallback chain for missing
    /// assets, and moves `current` to the displayed day. On terminal missing
    /// the viewer stays parked on the start day and the error carries it.
    pub fn show(&mut self, requested: DateKey) -> ResolveResult<NoteView> {
        let today = self.clock.today();
        match resolve_available(&self.store, &self.config, today, requested) {
            Ok(resolution) => {
                self.current = resolution.key;
                info!(
                    "event=note_show module=viewer status=ok key={} is_today={}",
                    resolution.key, resolution.is_today
                );
                Ok(NoteView::from_resolution(resolution))
            }
            Err(ResolveError::NoteMissing { key }) => {
                self.current = key;
                Err(ResolveError::NoteMissing { key })
            }
            Err(other) => Err(other),
        }
    }

    /// Steps one day backward. Clamping keeps the start day as the floor.
    pub fn back(&mut self) -> ResolveResult<NoteView> {
        let requested = self.current.pred().unwrap_or(self.current);
        self.show(requested)
    }

    /// Steps one day forward, refusing to pass today.
    ///
    /// At today this re-shows the current day instead of advancing; the
    /// viewer deliberately never displays a day beyond today. The clock is
    /// re-read on every call, so the guard picks up day rollover on the next
    /// interaction.
    pub fn forward(&mut self) -> ResolveResult<NoteView> {
        let today = self.clock.today();
        if self.current >= today {
            return self.show(self.current);
        }
        let requested = self.current.succ().unwrap_or(self.current);
        self.show(requested)
    }

    /// Jumps to the invocation-time local day.
    pub fn today(&mut self) -> ResolveResult<NoteView> {
        let today = self.clock.today();
        self.show(today)
    }

    /// Whether forward navigation would advance, for control enablement.
    pub fn is_forward_enabled(&self) -> bool {
        self.current < self.clock.today()
    }

    /// Builds the archive listing for `[start_date, today]`, ascending.
    ///
    /// Availability is marked from one store scan rather than per-day probes.
    /// Empty when the start day lies in the future.
    pub fn archive(&self) -> ResolveResult<Vec<ArchiveEntry>> {
        let today = self.clock.today();
        let stored: BTreeSet<DateKey> = self.store.scan_keys()?.into_iter().collect();

        Ok(enumerate_range(self.config.start_date, today)
            .into_iter()
            .map(|key| ArchiveEntry {
                key,
                reference: self.config.reference_for(key),
                available: stored.contains(&key),
            })
            .collect())
    }

    /// Fetches the asset bytes for a resolved view.
    ///
    /// Passthrough to the store; the presentation layer reports the outcome
    /// back through [`Self::apply_load_result`].
    pub fn fetch(&self, reference: &NoteReference) -> ResolveResult<NoteAsset> {
        Ok(self.store.fetch(reference)?)
    }

    /// Applies one asynchronous load result, keyed by the day it was issued
    /// for.
    ///
    /// Results for a day other than `current` are stale — a newer navigation
    /// superseded the request — and are ignored. A missing result for the
    /// current day advances the fallback walk; at the start day it is the
    /// terminal missing state.
    pub fn apply_load_result(
        &mut self,
        key: DateKey,
        outcome: LoadOutcome,
    ) -> ResolveResult<LoadApplied> {
        if key != self.current {
            debug!(
                "event=load_result module=viewer status=ignored key={} current={}",
                key, self.current
            );
            return Ok(LoadApplied::Ignored);
        }

        match outcome {
            LoadOutcome::Loaded => Ok(LoadApplied::Displayed),
            LoadOutcome::Missing => {
                if key == self.config.start_date {
                    warn!(
                        "event=load_result module=viewer status=exhausted key={}",
                        key
                    );
                    return Err(ResolveError::NoteMissing { key });
                }
                let requested = key.pred().unwrap_or(key);
                let view = self.show(requested)?;
                Ok(LoadApplied::FellBack(view))
            }
        }
    }
}
