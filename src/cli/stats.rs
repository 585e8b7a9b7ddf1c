//! CLI `stats` command: fetch and display the life statistics.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use momento::api::Backend;
use momento::config::MomentoConfig;
use momento::mortality::MortalityStats;

/// Fetch fresh statistics. They are never stored locally, so a backend
/// failure is reported instead of showing stale numbers.
pub async fn stats(config: &MomentoConfig) -> Result<()> {
    let (_conn, ctx) = super::open_session(config)?;
    let profile_id = super::require_profile(&ctx)?;
    let client = super::client(config)?;

    let (stats, profile) =
        tokio::join!(client.mortality_stats(&profile_id), client.profile(&profile_id));
    let stats = stats.context("could not load your statistics; try again shortly")?;

    match profile.ok().filter(|p| !p.name.is_empty()) {
        Some(p) => println!("{}'s Life", p.name),
        None => println!("Your Life"),
    }
    println!("{}", "=".repeat(40));
    print_progress(&stats)?;
    println!();
    super::print_stats(&stats);

    Ok(())
}

/// Draw the life percentage as a bar that stays on screen. Per mille keeps
/// the one decimal of the label.
fn print_progress(stats: &MortalityStats) -> Result<()> {
    let pb = ProgressBar::new(1000);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {bar:40.cyan/blue} {msg}")
            .context("invalid progress template")?
            .progress_chars("##-"),
    );
    pb.set_message(stats.format_percentage());
    pb.set_position((stats.display_percentage() * 10.0).round() as u64);
    pb.abandon();
    Ok(())
}
