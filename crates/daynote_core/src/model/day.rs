//! Calendar-day identifier.
//!
//! # Responsibility
//! - Provide the canonical `YYYY-MM-DD` key every note is addressed by.
//! - Provide day-step arithmetic and inclusive range enumeration inputs.
//!
//! # Invariants
//! - Construction only succeeds for real calendar dates.
//! - `Ord` on `DateKey` matches chronological order, which matches the
//!   lexicographic order of the canonical string form.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Canonical identifier for one calendar day.
///
/// Two keys are equal iff their (year, month, day) triples are equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Creates a key from calendar components.
    ///
    /// Returns `None` for impossible dates such as `2026-02-31`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an already-validated calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the next calendar day.
    ///
    /// `None` only at the upper end of the supported calendar range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Returns the previous calendar day.
    ///
    /// `None` only at the lower end of the supported calendar range.
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Shifts this key by `delta` days, negative values going backward.
    ///
    /// Pure calendar arithmetic with no range clamping. `None` only when the
    /// result would leave the supported calendar range.
    pub fn step(self, delta: i64) -> Option<Self> {
        let shift = Duration::try_days(delta)?;
        self.0.checked_add_signed(shift).map(Self)
    }

    /// Returns the long-form date label shown as the note title,
    /// e.g. `Sunday, March 1, 2026`.
    pub fn long_label(self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// Parse error for canonical `YYYY-MM-DD` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyParseError {
    /// Input does not have the `YYYY-MM-DD` digit shape.
    Malformed(String),
    /// Input has the right shape but names an impossible calendar date.
    ImpossibleDate(String),
}

impl Display for DateKeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "date key is malformed: `{value}` (expected YYYY-MM-DD)")
            }
            Self::ImpossibleDate(value) => {
                write!(f, "date key names an impossible date: `{value}`")
            }
        }
    }
}

impl Error for DateKeyParseError {}

impl FromStr for DateKey {
    type Err = DateKeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month, day) =
            split_key_shape(value).ok_or_else(|| DateKeyParseError::Malformed(value.to_string()))?;
        DateKey::from_ymd(year, month, day)
            .ok_or_else(|| DateKeyParseError::ImpossibleDate(value.to_string()))
    }
}

fn split_key_shape(value: &str) -> Option<(i32, u32, u32)> {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    if parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return None;
    }
    if !parts
        .iter()
        .all(|part| part.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    let year = parts[0].parse::<i32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::{DateKey, DateKeyParseError};
    use std::str::FromStr;

    #[test]
    fn parses_and_formats_canonical_key() {
        let key = DateKey::from_str("2026-02-20").expect("canonical key should parse");
        assert_eq!(key.to_string(), "2026-02-20");
        assert_eq!((key.year(), key.month(), key.day()), (2026, 2, 20));
    }

    #[test]
    fn rejects_malformed_shapes() {
        for input in ["2026-2-20", "20260220", "2026/02/20", "2026-02-20x", ""] {
            let err = DateKey::from_str(input).unwrap_err();
            assert!(matches!(err, DateKeyParseError::Malformed(_)), "{input}");
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        let err = DateKey::from_str("2026-02-31").unwrap_err();
        assert_eq!(
            err,
            DateKeyParseError::ImpossibleDate("2026-02-31".to_string())
        );
    }

    #[test]
    fn ordering_matches_chronology() {
        let earlier = DateKey::from_str("2026-02-28").unwrap();
        let later = DateKey::from_str("2026-03-01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn step_crosses_month_boundaries() {
        let key = DateKey::from_str("2026-02-28").unwrap();
        assert_eq!(key.step(1).unwrap().to_string(), "2026-03-01");
        assert_eq!(key.step(-28).unwrap().to_string(), "2026-01-31");
    }

    #[test]
    fn long_label_uses_weekday_and_month_names() {
        let key = DateKey::from_str("2026-03-01").unwrap();
        assert_eq!(key.long_label(), "Sunday, March 1, 2026");
    }
}
