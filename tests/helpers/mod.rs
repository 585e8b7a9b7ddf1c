#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use reqwest::StatusCode;
use tempfile::TempDir;

use momento::api::Backend;
use momento::error::ApiError;
use momento::model::{
    CreatedProfile, Goal, GoalDraft, GoalStatus, Profile, ProfileDraft, Quote, Reflection,
    ReflectionDraft, ReflectionType,
};
use momento::mortality::MortalityStats;
use momento::widget::WallClock;

/// A session database path inside a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_session() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("momento").join("session.db");
    (tmp, path)
}

/// Wall clock that moves with tokio's clock, so paused-time tests see the
/// countdown advance. Call inside the test runtime.
pub fn paused_wall_clock() -> WallClock {
    let start = tokio::time::Instant::now();
    let wall_start = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    Arc::new(move || wall_start + chrono::Duration::from_std(start.elapsed()).unwrap_or_default())
}

pub fn sample_stats() -> MortalityStats {
    MortalityStats {
        days_lived: 12_419,
        days_remaining: 16_802,
        weeks_lived: 1_774,
        weeks_remaining: 2_400,
        life_percentage: 42.5,
        current_age: 34,
        expected_death_date: NaiveDate::from_ymd_opt(2070, 6, 15).unwrap(),
    }
}

pub fn sample_quote() -> Quote {
    Quote {
        id: "q-1".into(),
        text: "Let us prepare our minds as if we'd come to the very end of life.".into(),
        author: "Seneca".into(),
        category: Some("stoicism".into()),
    }
}

pub fn unavailable() -> ApiError {
    ApiError::Upstream {
        status: StatusCode::SERVICE_UNAVAILABLE,
        message: Some("maintenance".into()),
    }
}

/// In-memory backend recording profile creations.
#[derive(Default)]
pub struct FakeBackend {
    pub fail_create: bool,
    pub created: Mutex<Vec<ProfileDraft>>,
}

#[async_trait]
impl Backend for FakeBackend {
    async fn create_profile(&self, draft: &ProfileDraft) -> Result<CreatedProfile, ApiError> {
        if self.fail_create {
            return Err(unavailable());
        }
        let mut created = self.created.lock().unwrap();
        created.push(draft.clone());
        Ok(CreatedProfile {
            id: format!("profile-{}", created.len()),
        })
    }

    async fn profile(&self, id: &str) -> Result<Profile, ApiError> {
        let created = self.created.lock().unwrap();
        let draft = created.last().ok_or_else(unavailable)?;
        Ok(Profile {
            id: id.to_string(),
            birth_date: draft.birth_date,
            life_expectancy: draft.life_expectancy,
            name: draft.name.clone(),
            country: draft.country.clone(),
        })
    }

    async fn mortality_stats(&self, _: &str) -> Result<MortalityStats, ApiError> {
        Ok(sample_stats())
    }

    async fn daily_quote(&self) -> Result<Quote, ApiError> {
        Ok(sample_quote())
    }

    async fn goals(&self, _: &str, _: Option<GoalStatus>) -> Result<Vec<Goal>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_goal(&self, _: &GoalDraft) -> Result<Goal, ApiError> {
        Err(unavailable())
    }

    async fn update_goal(&self, _: &str, _: &GoalDraft) -> Result<Goal, ApiError> {
        Err(unavailable())
    }

    async fn reflections(
        &self,
        _: &str,
        _: Option<ReflectionType>,
    ) -> Result<Vec<Reflection>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_reflection(&self, _: &ReflectionDraft) -> Result<Reflection, ApiError> {
        Err(unavailable())
    }
}
