//! Pure mortality statistics computation.
//!
//! [`compute_stats`] turns a validated `(birth_date, life_expectancy)` pair and
//! the current instant into a [`MortalityStats`] snapshot. Dates are anchored
//! at 00:00 UTC; day counts are truncated, never rounded.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

use super::types::MortalityStats;

/// Birth date shifted forward by `life_expectancy` calendar years.
///
/// Feb 29 lands on Feb 28 when the target year is not a leap year.
pub fn expected_death_date(birth_date: NaiveDate, life_expectancy: u32) -> NaiveDate {
    birth_date
        .checked_add_months(Months::new(life_expectancy.saturating_mul(12)))
        .unwrap_or(NaiveDate::MAX)
}

/// Full years between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Compute the statistics snapshot for `now`.
///
/// The caller validates input first; there is no error path here.
pub fn compute_stats(
    birth_date: NaiveDate,
    life_expectancy: u32,
    now: DateTime<Utc>,
) -> MortalityStats {
    let death_date = expected_death_date(birth_date, life_expectancy);

    let days_lived = (now - midnight_utc(birth_date)).num_days().max(0);
    let days_remaining = (midnight_utc(death_date) - now).num_days();

    let span = days_lived + days_remaining.max(0);
    let life_percentage = if span > 0 {
        100.0 * days_lived as f64 / span as f64
    } else {
        0.0
    };

    MortalityStats {
        days_lived,
        days_remaining,
        weeks_lived: days_lived.div_euclid(7),
        weeks_remaining: days_remaining.div_euclid(7),
        life_percentage,
        current_age: age_on(birth_date, now.date_naive()),
        expected_death_date: death_date,
    }
}

/// 00:00 UTC on `date`.
pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn leap_day_birthday_rolls_back_in_common_year() {
        assert_eq!(expected_death_date(date(2000, 2, 29), 21), date(2021, 2, 28));
        assert_eq!(expected_death_date(date(2000, 2, 29), 24), date(2024, 2, 29));
    }

    #[test]
    fn death_date_is_calendar_accurate() {
        assert_eq!(expected_death_date(date(1990, 6, 15), 80), date(2070, 6, 15));
    }

    #[test]
    fn age_on_birthday_counts_the_new_year() {
        let stats = compute_stats(date(1990, 6, 15), 80, at(2024, 6, 15, 0));
        assert_eq!(stats.current_age, 34);
    }

    #[test]
    fn age_day_before_birthday() {
        assert_eq!(age_on(date(1990, 6, 15), date(2024, 6, 14)), 33);
        assert_eq!(age_on(date(1990, 6, 15), date(2024, 7, 1)), 34);
    }

    #[test]
    fn days_are_truncated() {
        let birth = date(2000, 1, 1);
        let stats = compute_stats(birth, 80, at(2000, 1, 2, 23));
        assert_eq!(stats.days_lived, 1);
        assert_eq!(stats.weeks_lived, 0);
    }

    #[test]
    fn lived_plus_remaining_matches_span() {
        let birth = date(1985, 3, 10);
        let death = expected_death_date(birth, 75);
        let total = (death - birth).num_days();
        for hour in [0, 1, 12, 23] {
            let stats = compute_stats(birth, 75, at(2024, 11, 5, hour));
            let sum = stats.days_lived + stats.days_remaining;
            assert!((sum - total).abs() <= 1, "sum {sum} vs total {total}");
        }
    }

    #[test]
    fn percentage_is_monotonic() {
        let birth = date(1970, 1, 1);
        let mut now = at(1970, 1, 1, 0);
        let end = at(2060, 1, 1, 0);
        let mut previous = -1.0;
        while now < end {
            let pct = compute_stats(birth, 80, now).life_percentage;
            assert!(pct >= previous, "percentage went from {previous} to {pct} at {now}");
            previous = pct;
            now += Duration::hours(77);
        }
    }

    #[test]
    fn remaining_goes_negative_past_expectancy() {
        let stats = compute_stats(date(1940, 5, 1), 80, at(2024, 5, 1, 0));
        assert_eq!(stats.expected_death_date, date(2020, 5, 1));
        assert!(stats.days_remaining < 0);
        assert_eq!(stats.weeks_remaining, stats.days_remaining.div_euclid(7));
        assert_eq!(stats.life_percentage, 100.0);
        assert!(stats.is_beyond_expectancy());
    }

    #[test]
    fn halfway_is_fifty_percent() {
        let birth = date(2000, 1, 1);
        let death = expected_death_date(birth, 20);
        let half = (death - birth).num_days() / 2;
        let now = midnight_utc(birth) + Duration::days(half);
        let stats = compute_stats(birth, 20, now);
        assert!((stats.life_percentage - 50.0).abs() < 0.01);
    }

    #[test]
    fn weeks_floor_negative_days() {
        let birth = date(1930, 1, 1);
        let stats = compute_stats(birth, 20, midnight_utc(date(1950, 1, 2)));
        assert_eq!(stats.days_remaining, -1);
        assert_eq!(stats.weeks_remaining, -1);
    }
}
