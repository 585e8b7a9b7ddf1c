//! CLI `onboard` command.

use anyhow::{bail, Result};
use chrono::Utc;

use momento::config::MomentoConfig;
use momento::onboarding::{complete_onboarding, OnboardingError, OnboardingForm};
use momento::session::Route;

pub async fn onboard(config: &MomentoConfig, form: OnboardingForm) -> Result<()> {
    let (mut conn, ctx) = super::open_session(config)?;
    if let Route::Main { profile_id } = ctx.route() {
        bail!("already onboarded as profile {profile_id}; run `momento reset` to start over");
    }

    let client = super::client(config)?;
    let today = Utc::now().date_naive();

    match complete_onboarding(&client, &mut conn, &form, today).await {
        Ok(ctx) => {
            println!("Welcome. Your profile is ready.");
            if let Some(id) = ctx.profile_id() {
                println!("Profile id: {id}");
            }
            println!("Run `momento stats` to see where you stand.");
            Ok(())
        }
        Err(OnboardingError::Validation(e)) => bail!("{e}; nothing was saved"),
        Err(e) => Err(e.into()),
    }
}
