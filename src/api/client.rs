//! reqwest implementation of [`Backend`].

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Backend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{
    CreatedProfile, Goal, GoalDraft, GoalStatus, Profile, ProfileDraft, Quote, Reflection,
    ReflectionDraft, ReflectionType,
};
use crate::mortality::MortalityStats;

/// Error payloads the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Thin JSON client for the Momento Mori backend.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid API base URL: {base_url}"))?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "API base URL must be hierarchical: {base_url}"
        );
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// `base_url` + percent-encoded path segments + optional query pair.
    fn endpoint(&self, segments: &[&str], query: Option<(&str, &str)>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let res = self.http.get(url).send().await.map_err(ApiError::Transport)?;
        decode(res).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(%url, "POST");
        let res = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode(res).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(%url, "PUT");
        let res = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode(res).await
    }
}

/// Map non-2xx to [`ApiError::Upstream`], keeping the backend's message, and
/// decode 2xx bodies as JSON.
async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let status = res.status();
    if !status.is_success() {
        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error));
        tracing::warn!(%status, message = message.as_deref().unwrap_or(""), "backend request failed");
        return Err(ApiError::Upstream { status, message });
    }
    res.json::<T>().await.map_err(ApiError::Decode)
}

#[async_trait]
impl Backend for ApiClient {
    async fn create_profile(&self, draft: &ProfileDraft) -> Result<CreatedProfile, ApiError> {
        self.post(self.endpoint(&["api", "profile"], None), draft).await
    }

    async fn profile(&self, id: &str) -> Result<Profile, ApiError> {
        self.get(self.endpoint(&["api", "profile", id], None)).await
    }

    async fn mortality_stats(&self, profile_id: &str) -> Result<MortalityStats, ApiError> {
        self.get(self.endpoint(&["api", "mortality", profile_id], None))
            .await
    }

    async fn daily_quote(&self) -> Result<Quote, ApiError> {
        self.get(self.endpoint(&["api", "quotes", "daily"], None)).await
    }

    async fn goals(
        &self,
        user_id: &str,
        status: Option<GoalStatus>,
    ) -> Result<Vec<Goal>, ApiError> {
        let query = status.map(|s| ("status", s.as_str()));
        self.get(self.endpoint(&["api", "goals", user_id], query)).await
    }

    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal, ApiError> {
        self.post(self.endpoint(&["api", "goals"], None), draft).await
    }

    async fn update_goal(&self, id: &str, draft: &GoalDraft) -> Result<Goal, ApiError> {
        self.put(self.endpoint(&["api", "goals", id], None), draft).await
    }

    async fn reflections(
        &self,
        user_id: &str,
        reflection_type: Option<ReflectionType>,
    ) -> Result<Vec<Reflection>, ApiError> {
        let query = reflection_type.map(|t| ("type", t.as_str()));
        self.get(self.endpoint(&["api", "reflections", user_id], query))
            .await
    }

    async fn create_reflection(&self, draft: &ReflectionDraft) -> Result<Reflection, ApiError> {
        self.post(self.endpoint(&["api", "reflections"], None), draft)
            .await
    }
}
