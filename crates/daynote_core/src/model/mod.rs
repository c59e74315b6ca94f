//! Canonical domain model for daily notes.
//!
//! # Responsibility
//! - Define the calendar-day identifier every other layer is keyed by.
//! - Define the deterministic asset-path shape notes are stored under.
//!
//! # Invariants
//! - A `DateKey` always denotes a real calendar day.
//! - A `NoteReference` is a pure function of (folder, key, extension).

pub mod day;
pub mod note_ref;
