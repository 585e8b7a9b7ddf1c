//! Error taxonomy shared across the client core.
//!
//! Three families, matching how each one is surfaced:
//!
//! - [`ValidationError`]: bad form input, rejected before any network call.
//! - [`ApiError`]: transport failures and non-2xx responses from the backend.
//! - [`BootstrapError`]: the session store could not be opened or read.

use reqwest::StatusCode;
use thiserror::Error;

/// Form input rejected before it reaches the backend. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("birth date `{0}` is not a valid YYYY-MM-DD date")]
    InvalidBirthDate(String),

    #[error("birth date {0} is in the future")]
    BirthDateInFuture(chrono::NaiveDate),

    #[error("life expectancy `{0}` is not a whole number of years")]
    InvalidLifeExpectancy(String),

    #[error("life expectancy must be between {min} and {max} years, got {value}")]
    LifeExpectancyOutOfRange { value: u32, min: u32, max: u32 },

    #[error("goal title must not be empty")]
    EmptyGoalTitle,

    #[error("target date `{0}` is not a valid YYYY-MM-DD date")]
    InvalidTargetDate(String),

    #[error("{field} must be between 1 and 5, got {value}")]
    ScoreOutOfRange { field: &'static str, value: u8 },
}

/// Failure talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("backend returned {status}{}", upstream_suffix(.message))]
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("backend response decode error: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// `true` for 404 responses, which callers may treat as "no such record".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Upstream { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

fn upstream_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// The session store could not be used to decide where the app starts.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to open session store at {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("failed to read session state: {0}")]
    Read(#[from] rusqlite::Error),
}
