//! Mortality statistics snapshot and its display policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived time metrics for one profile at one instant. Never stored by the
/// backend; recomputed on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortalityStats {
    /// Full days since the birth date.
    pub days_lived: i64,
    /// Full days until the expected death date. Negative once it has passed.
    pub days_remaining: i64,
    pub weeks_lived: i64,
    pub weeks_remaining: i64,
    /// Share of the expected lifespan already lived. Not clamped.
    pub life_percentage: f64,
    /// Age in full years.
    pub current_age: u32,
    /// Birth date plus the life expectancy in calendar years.
    pub expected_death_date: NaiveDate,
}

impl MortalityStats {
    /// Percentage clamped into `[0, 100]` for progress bars and labels.
    pub fn display_percentage(&self) -> f64 {
        if self.life_percentage.is_nan() {
            return 0.0;
        }
        self.life_percentage.clamp(0.0, 100.0)
    }

    /// The clamped percentage with one decimal place, e.g. `"42.5%"`.
    pub fn format_percentage(&self) -> String {
        format!("{:.1}%", self.display_percentage())
    }

    /// `true` once the expected death date has been reached.
    pub fn is_beyond_expectancy(&self) -> bool {
        self.days_remaining <= 0
    }
}
