//! Profile records and onboarding form validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_LIFE_EXPECTANCY: u32 = 20;
pub const MAX_LIFE_EXPECTANCY: u32 = 120;
pub const DEFAULT_LIFE_EXPECTANCY: u32 = 80;

/// A profile as stored by the backend. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub birth_date: NaiveDate,
    pub life_expectancy: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Validated payload for `POST /api/profile`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDraft {
    pub birth_date: NaiveDate,
    pub life_expectancy: u32,
    pub name: String,
    pub country: Option<String>,
}

/// Response of `POST /api/profile`; only the id is needed by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProfile {
    pub id: String,
}

/// Parse a `YYYY-MM-DD` birth date that is not after `today`.
pub fn parse_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidBirthDate(raw.to_string()))?;
    if date > today {
        return Err(ValidationError::BirthDateInFuture(date));
    }
    Ok(date)
}

/// Check a life expectancy against `[20, 120]`.
pub fn validate_life_expectancy(years: u32) -> Result<u32, ValidationError> {
    if (MIN_LIFE_EXPECTANCY..=MAX_LIFE_EXPECTANCY).contains(&years) {
        Ok(years)
    } else {
        Err(ValidationError::LifeExpectancyOutOfRange {
            value: years,
            min: MIN_LIFE_EXPECTANCY,
            max: MAX_LIFE_EXPECTANCY,
        })
    }
}

/// Parse free-form life expectancy input (e.g. from a text field).
pub fn parse_life_expectancy(raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    let years = raw
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidLifeExpectancy(raw.to_string()))?;
    validate_life_expectancy(years)
}

/// Normalize a country code: trimmed, upper-cased, `None` when blank.
pub fn normalize_country(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn birth_date_parses_iso() {
        assert_eq!(
            parse_birth_date(" 1990-06-15 ", today()).unwrap(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn birth_date_rejects_garbage_and_impossible_dates() {
        assert!(matches!(
            parse_birth_date("15/06/1990", today()),
            Err(ValidationError::InvalidBirthDate(_))
        ));
        assert!(matches!(
            parse_birth_date("2001-02-29", today()),
            Err(ValidationError::InvalidBirthDate(_))
        ));
    }

    #[test]
    fn birth_date_rejects_future() {
        assert!(matches!(
            parse_birth_date("2024-06-16", today()),
            Err(ValidationError::BirthDateInFuture(_))
        ));
        assert!(parse_birth_date("2024-06-15", today()).is_ok());
    }

    #[test]
    fn life_expectancy_bounds_are_inclusive() {
        assert_eq!(validate_life_expectancy(20).unwrap(), 20);
        assert_eq!(validate_life_expectancy(120).unwrap(), 120);
        assert!(validate_life_expectancy(19).is_err());
        assert!(validate_life_expectancy(121).is_err());
    }

    #[test]
    fn life_expectancy_text_input() {
        assert_eq!(parse_life_expectancy(" 85 ").unwrap(), 85);
        assert!(matches!(
            parse_life_expectancy("eighty"),
            Err(ValidationError::InvalidLifeExpectancy(_))
        ));
        assert!(matches!(
            parse_life_expectancy("-5"),
            Err(ValidationError::InvalidLifeExpectancy(_))
        ));
    }

    #[test]
    fn country_normalization() {
        assert_eq!(normalize_country(Some(" us ")), Some("US".to_string()));
        assert_eq!(normalize_country(Some("  ")), None);
        assert_eq!(normalize_country(None), None);
    }

    #[test]
    fn draft_serializes_create_body() {
        let draft = ProfileDraft {
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            life_expectancy: 80,
            name: "Sam".into(),
            country: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["birth_date"], "1990-06-15");
        assert_eq!(json["life_expectancy"], 80);
        assert!(json["country"].is_null());
    }
}
