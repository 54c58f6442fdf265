use std::collections::HashMap;
use std::path::PathBuf;

use client::HttpConfig;
use domain::models::{GeoPoint, DEFAULT_CENTER, DEFAULT_RADIUS_METERS, DEFAULT_ZOOM};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub assignment: AssignmentConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `0` disables the timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Headers sent with every request, e.g. for a tunneling proxy.
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// File holding the access token between invocations.
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Interval between refreshes in `watch` mode.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentConfig {
    /// Radius pre-filled in the assign-duty form.
    #[serde(default = "default_radius")]
    pub default_radius_meters: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            extra_headers: HashMap::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            default_radius_meters: default_radius(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            zoom: default_zoom(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_token_path() -> PathBuf {
    PathBuf::from(".duty-console/token.json")
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_poll_interval() -> u64 {
    15
}
fn default_radius() -> f64 {
    DEFAULT_RADIUS_METERS
}
fn default_latitude() -> f64 {
    DEFAULT_CENTER.lat
}
fn default_longitude() -> f64 {
    DEFAULT_CENTER.lng
}
fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl ApiConfig {
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            base_url: self.base_url.clone(),
            request_timeout_secs: self.request_timeout_secs,
            extra_headers: self.extra_headers.clone(),
        }
    }
}

impl MapConfig {
    /// Center used when no officer has a duty.
    pub fn fallback_center(&self) -> GeoPoint {
        GeoPoint::new(self.default_latitude, self.default_longitude)
    }
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration (optional, built-in defaults apply)
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with DC__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("DC").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds from embedded defaults so tests do not depend on the working
    /// directory.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [api]
            base_url = "http://localhost:8000"
            request_timeout_secs = 5

            [session]
            token_path = "target/test-token.json"

            [logging]
            level = "debug"
            format = "pretty"

            [dashboard]
            poll_interval_secs = 1

            [assignment]
            default_radius_meters = 100.0

            [map]
            default_latitude = 15.2993
            default_longitude = 74.124
            zoom = 10
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "DC__API__BASE_URL environment variable must be set".to_string(),
            ));
        }

        if self.dashboard.poll_interval_secs == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "dashboard.poll_interval_secs cannot be 0".to_string(),
            ));
        }

        if shared::validation::validate_radius(self.assignment.default_radius_meters).is_err() {
            return Err(ConfigValidationError::InvalidValue(
                "assignment.default_radius_meters must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
