//! Onboarding flow: validate the form, create the profile, persist the session.
//!
//! Validation runs before any network call. A backend failure leaves the
//! session untouched, so the user can retry the same form.

use chrono::NaiveDate;
use rusqlite::Connection;
use thiserror::Error;

use crate::api::Backend;
use crate::error::{ApiError, ValidationError};
use crate::model::profile::{normalize_country, parse_birth_date, parse_life_expectancy};
use crate::model::ProfileDraft;
use crate::session::SessionContext;

/// Raw onboarding input, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub birth_date: String,
    pub life_expectancy: String,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not create profile: {0}")]
    Api(#[from] ApiError),

    #[error("profile created but the session could not be saved: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl OnboardingForm {
    /// Check every field; `today` bounds the birth date.
    pub fn validate(&self, today: NaiveDate) -> Result<ProfileDraft, ValidationError> {
        let birth_date = parse_birth_date(&self.birth_date, today)?;
        let life_expectancy = parse_life_expectancy(&self.life_expectancy)?;
        Ok(ProfileDraft {
            birth_date,
            life_expectancy,
            name: self.name.trim().to_string(),
            country: normalize_country(self.country.as_deref()),
        })
    }
}

/// Run the whole flow and return the session context for the main experience.
pub async fn complete_onboarding(
    backend: &dyn Backend,
    conn: &mut Connection,
    form: &OnboardingForm,
    today: NaiveDate,
) -> Result<SessionContext, OnboardingError> {
    let draft = form.validate(today)?;

    let created = backend.create_profile(&draft).await?;
    tracing::info!(
        profile_id = %created.id,
        life_expectancy = draft.life_expectancy,
        "profile created"
    );

    Ok(SessionContext::complete_onboarding(conn, &created.id)?)
}
