//! Backend collaborator.
//!
//! [`Backend`] is the seam every screen and the widget depend on; [`ApiClient`]
//! is the reqwest implementation talking JSON over HTTP. Tests substitute
//! their own implementations.

pub mod client;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{
    CreatedProfile, Goal, GoalDraft, GoalStatus, Profile, ProfileDraft, Quote, Reflection,
    ReflectionDraft, ReflectionType,
};
use crate::mortality::MortalityStats;

pub use client::ApiClient;

#[async_trait]
pub trait Backend: Send + Sync {
    async fn create_profile(&self, draft: &ProfileDraft) -> Result<CreatedProfile, ApiError>;

    async fn profile(&self, id: &str) -> Result<Profile, ApiError>;

    async fn mortality_stats(&self, profile_id: &str) -> Result<MortalityStats, ApiError>;

    async fn daily_quote(&self) -> Result<Quote, ApiError>;

    async fn goals(&self, user_id: &str, status: Option<GoalStatus>)
        -> Result<Vec<Goal>, ApiError>;

    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal, ApiError>;

    async fn update_goal(&self, id: &str, draft: &GoalDraft) -> Result<Goal, ApiError>;

    async fn reflections(
        &self,
        user_id: &str,
        reflection_type: Option<ReflectionType>,
    ) -> Result<Vec<Reflection>, ApiError>;

    async fn create_reflection(&self, draft: &ReflectionDraft) -> Result<Reflection, ApiError>;
}
