//! Live countdown derived from the last backend snapshot.
//!
//! Each tick subtracts the current wall clock from 00:00 UTC on the
//! snapshot's `expected_death_date`. Only the date comes from the backend,
//! so the seconds keep moving between polls, a fresh snapshot lines up with
//! the previous one, and time spent suspended is accounted for on wake.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::mortality::calculator::midnight_utc;

/// Whole seconds left, split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    total_seconds: i64,
    expired: bool,
}

impl Countdown {
    /// Time left until `expected_death_date` as seen at `now`.
    pub fn until(expected_death_date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self::from_millis((midnight_utc(expected_death_date) - now).num_milliseconds())
    }

    pub fn from_millis(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self {
                total_seconds: 0,
                expired: true,
            };
        }
        Self {
            total_seconds: remaining_ms / 1000,
            expired: false,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn days(&self) -> i64 {
        self.total_seconds / 86_400
    }

    pub fn hours(&self) -> i64 {
        self.total_seconds % 86_400 / 3600
    }

    pub fn minutes(&self) -> i64 {
        self.total_seconds % 3600 / 60
    }

    pub fn seconds(&self) -> i64 {
        self.total_seconds % 60
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}:{:02}:{:02}",
            self.days(),
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
