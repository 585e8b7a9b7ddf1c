//! Session state owned by the app shell.
//!
//! The persisted flags are read once by [`SessionContext::initialize`] and the
//! resulting context is handed to every screen, which asks it for the
//! [`Route`] and the profile id instead of reading the store on its own.

pub mod store;

use std::path::Path;

use rusqlite::Connection;

use crate::error::BootstrapError;

/// Where the app starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    Main { profile_id: String },
}

/// Snapshot of the persisted session flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    onboarding_completed: Option<String>,
    profile_id: Option<String>,
}

impl SessionContext {
    /// Build the context from raw stored values.
    pub fn from_values(onboarding_completed: Option<String>, profile_id: Option<String>) -> Self {
        Self {
            onboarding_completed,
            profile_id,
        }
    }

    /// Read the session flags from an open store.
    pub fn initialize(conn: &Connection) -> Result<Self, BootstrapError> {
        let onboarding_completed = store::get_value(conn, store::ONBOARDING_COMPLETED)?;
        let profile_id = store::get_value(conn, store::USER_PROFILE_ID)?;
        let ctx = Self::from_values(onboarding_completed, profile_id);
        tracing::debug!(route = ?ctx.route(), "session initialized");
        Ok(ctx)
    }

    /// Open the store at `path` and read the session flags.
    pub fn bootstrap(path: &Path) -> Result<(Connection, Self), BootstrapError> {
        let conn = crate::db::open_database(path).map_err(|e| BootstrapError::Open {
            path: path.display().to_string(),
            reason: format!("{e:#}"),
        })?;
        let ctx = Self::initialize(&conn)?;
        Ok((conn, ctx))
    }

    /// Main experience only for `{onboardingCompleted: "true", userProfileId: non-empty}`.
    pub fn route(&self) -> Route {
        match (self.onboarding_completed.as_deref(), self.profile_id.as_deref()) {
            (Some("true"), Some(id)) if !id.trim().is_empty() => Route::Main {
                profile_id: id.to_string(),
            },
            _ => Route::Onboarding,
        }
    }

    /// The profile id, when the session routes to the main experience.
    pub fn profile_id(&self) -> Option<&str> {
        match (self.onboarding_completed.as_deref(), self.profile_id.as_deref()) {
            (Some("true"), Some(id)) if !id.trim().is_empty() => Some(id),
            _ => None,
        }
    }

    /// Persist a finished onboarding and return the updated context.
    pub fn complete_onboarding(
        conn: &mut Connection,
        profile_id: &str,
    ) -> rusqlite::Result<Self> {
        let tx = conn.transaction()?;
        store::set_value(&tx, store::USER_PROFILE_ID, profile_id)?;
        store::set_value(&tx, store::ONBOARDING_COMPLETED, "true")?;
        tx.commit()?;
        tracing::info!(profile_id, "onboarding completed");
        Ok(Self::from_values(Some("true".into()), Some(profile_id.into())))
    }

    /// Forget the session; the next start routes to onboarding.
    pub fn reset(conn: &Connection) -> rusqlite::Result<Self> {
        store::clear_all(conn)?;
        tracing::info!("session reset");
        Ok(Self::from_values(None, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(done: Option<&str>, id: Option<&str>) -> SessionContext {
        SessionContext::from_values(done.map(String::from), id.map(String::from))
    }

    #[test]
    fn completed_with_profile_routes_to_main() {
        assert_eq!(
            ctx(Some("true"), Some("abc")).route(),
            Route::Main {
                profile_id: "abc".into()
            }
        );
    }

    #[test]
    fn every_other_combination_routes_to_onboarding() {
        let cases = [
            (None, None),
            (Some("true"), None),
            (None, Some("abc")),
            (Some("false"), Some("abc")),
            (Some("TRUE"), Some("abc")),
            (Some("true"), Some("")),
            (Some("true"), Some("   ")),
        ];
        for (done, id) in cases {
            assert_eq!(ctx(done, id).route(), Route::Onboarding, "{done:?} {id:?}");
            assert_eq!(ctx(done, id).profile_id(), None);
        }
    }

    #[test]
    fn complete_then_reset() {
        let mut conn = crate::db::open_memory_database().unwrap();
        assert_eq!(SessionContext::initialize(&conn).unwrap().route(), Route::Onboarding);

        let done = SessionContext::complete_onboarding(&mut conn, "p-42").unwrap();
        assert_eq!(done.profile_id(), Some("p-42"));
        assert_eq!(SessionContext::initialize(&conn).unwrap(), done);

        SessionContext::reset(&mut conn).unwrap();
        assert_eq!(SessionContext::initialize(&conn).unwrap().route(), Route::Onboarding);
    }
}
