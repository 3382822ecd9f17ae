//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sitewatch.toml` (or the path given on the command line).
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use sitewatch_adapter_http_reqwest::HttpApiConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Monitoring backend settings.
    pub api: HttpApiConfig,
    /// Dashboard behaviour.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Dashboard refresh configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between two automatic refreshes.
    pub poll_interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present), apply environment
    /// overrides, then the `--api-url` flag, and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path, api_url: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_file(path)?.resolve(|key| std::env::var(key).ok(), api_url)
    }

    fn resolve(
        mut self,
        var: impl Fn(&str) -> Option<String>,
        api_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        self.apply_env_overrides(var);
        if let Some(url) = api_url {
            self.api.base_url = url.to_string();
        }
        self.validate()?;
        Ok(self)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SITEWATCH_API_URL") {
            self.api.base_url = val;
        }
        if let Some(secs) = var("SITEWATCH_POLL_SECONDS").and_then(|val| val.parse().ok()) {
            self.dashboard.poll_interval_secs = secs;
        }
        if let Some(val) = var("SITEWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Check semantic constraints that TOML parsing cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an empty API URL or a zero
    /// poll interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.dashboard.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "dashboard.poll_interval_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Refresh interval as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.dashboard.poll_interval_secs)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sitewatch=info,sitewatch_app=info,sitewatch_adapter_http_reqwest=warn"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
