//! CLI `reset` command: forget the local session after confirmation.

use anyhow::{bail, Context, Result};
use std::io::Write;

use momento::config::MomentoConfig;
use momento::session::SessionContext;

/// Clear the session flags. The backend profile is
/// left alone.
pub fn reset(config: &MomentoConfig, yes: bool) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !yes {
        println!("This forgets your local session.");
        println!("Session: {}", db_path.display());
        print!("\nType YES to confirm: ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if input.trim() != "YES" {
            bail!("reset cancelled");
        }
    }

    let (conn, _) = super::open_session(config)?;
    SessionContext::reset(&conn).context("failed to clear the session")?;

    println!("Session cleared. Run `momento onboard` to start again.");
    Ok(())
}
