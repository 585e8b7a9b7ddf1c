//! CLI `doctor` command: check the session database and print a report.

use anyhow::{Context, Result};

use momento::config::MomentoConfig;
use momento::db;
use momento::session::{Route, SessionContext};

pub fn doctor(config: &MomentoConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !db_path.exists() {
        println!("Session: not found at {}", db_path.display());
        println!("Run `momento onboard` to create it.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    let conn = db::open_database(&db_path).context("failed to open session (may be corrupt)")?;
    let report = db::check_database_health(&conn).context("failed to run health check")?;
    let ctx = SessionContext::initialize(&conn)?;

    println!("Momento Health Report");
    println!("=====================");
    println!();
    println!("Session:           {}", db_path.display());
    println!("File size:         {}", format_bytes(file_size));
    println!("Schema version:    {}", report.schema_version);
    println!("API:               {}", config.api.base_url);
    println!();
    match ctx.route() {
        Route::Main { profile_id } => println!("Onboarding:        done (profile {profile_id})"),
        Route::Onboarding => println!("Onboarding:        pending"),
    }
    println!("Session keys:      {}", report.session_keys);
    println!();
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
        println!();
        println!("Recovery: run `momento reset --yes`, or delete the file and onboard again.");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
