//! Key-value session flags. Nothing else is persisted locally.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

pub const ONBOARDING_COMPLETED: &str = "onboardingCompleted";
pub const USER_PROFILE_ID: &str = "userProfileId";

pub fn get_value(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM session_kv WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .optional()
}

pub fn set_value(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO session_kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Remove every session flag.
pub fn clear_all(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM session_kv", [])?;
    Ok(())
}
