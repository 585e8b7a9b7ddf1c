pub mod calc;
pub mod doctor;
pub mod goals;
pub mod onboard;
pub mod quote;
pub mod reflections;
pub mod reset;
pub mod stats;
pub mod widget;

use anyhow::{bail, Context, Result};
use rusqlite::Connection;

use momento::api::ApiClient;
use momento::config::MomentoConfig;
use momento::mortality::MortalityStats;
use momento::session::{Route, SessionContext};

/// Open the session store, printing a retry hint when it cannot be read.
pub fn open_session(config: &MomentoConfig) -> Result<(Connection, SessionContext)> {
    let db_path = config.resolved_db_path();
    SessionContext::bootstrap(&db_path).with_context(|| {
        format!(
            "could not load your session from {}; check the path and try again, \
             or run `momento doctor`",
            db_path.display()
        )
    })
}

/// The profile id of a finished onboarding, or an error pointing at `momento onboard`.
pub fn require_profile(ctx: &SessionContext) -> Result<String> {
    match ctx.route() {
        Route::Main { profile_id } => Ok(profile_id),
        Route::Onboarding => bail!("no profile yet; run `momento onboard` first"),
    }
}

pub fn client(config: &MomentoConfig) -> Result<ApiClient> {
    ApiClient::from_config(&config.api)
}

/// Plain-text statistics block shared by `stats` and `calc`.
pub fn print_stats(stats: &MortalityStats) {
    println!("  Age:                 {}", stats.current_age);
    println!("  Days lived:          {}", stats.days_lived);
    println!("  Days remaining:      {}", stats.days_remaining);
    println!("  Weeks lived:         {}", stats.weeks_lived);
    println!("  Weeks remaining:     {}", stats.weeks_remaining);
    println!("  Expected date:       {}", stats.expected_death_date);
    println!("  Life lived:          {}", stats.format_percentage());
    if stats.is_beyond_expectancy() {
        println!();
        println!("  You have outlived your expectancy. Every day is a bonus.");
    }
}
