use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MomentoConfig {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub widget: WidgetConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub session_db: String,
}

/// Widget refresh cadence, screen geometry, and animation tuning.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Backend snapshot refresh, in seconds.
    pub poll_interval_secs: u64,
    /// Local countdown tick, in milliseconds.
    pub tick_interval_ms: u64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub widget_width: f64,
    pub widget_height: f64,
    /// Distance kept from the left/right edge after snapping.
    pub edge_margin: f64,
    /// Smallest y the widget may rest at (below the top chrome).
    pub top_bound: f64,
    /// Distance kept from the bottom edge.
    pub bottom_margin: f64,
    /// Pointer travel, in pixels, before a press becomes a drag.
    pub drag_threshold: f64,
    pub animation_ms: u64,
    pub minimized_scale: f64,
    pub minimized_opacity: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            timeout_secs: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let session_db = default_momento_dir()
            .join("session.db")
            .to_string_lossy()
            .into_owned();
        Self { session_db }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 60,
            tick_interval_ms: 1000,
            screen_width: 390.0,
            screen_height: 844.0,
            widget_width: 160.0,
            widget_height: 72.0,
            edge_margin: 16.0,
            top_bound: 100.0,
            bottom_margin: 100.0,
            drag_threshold: 8.0,
            animation_ms: 300,
            minimized_scale: 0.6,
            minimized_opacity: 0.85,
        }
    }
}

impl WidgetConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

/// Returns `~/.momento/`, or `./.momento/` when no home directory is known.
pub fn default_momento_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".momento")
}

/// Returns the default config file path: `~/.momento/config.toml`
pub fn default_config_path() -> PathBuf {
    default_momento_dir().join("config.toml")
}

impl MomentoConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            MomentoConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (MOMENTO_API_URL, MOMENTO_DB, MOMENTO_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MOMENTO_API_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("MOMENTO_DB") {
            self.storage.session_db = val;
        }
        if let Ok(val) = std::env::var("MOMENTO_LOG_LEVEL") {
            self.app.log_level = val;
        }
    }

    /// Resolve the session database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.session_db)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
