//! Configuration types and the YAML loader
//!
//! Every field is optional; an empty document yields the defaults (an empty
//! request URL, 15 s connect timeout, 10 s read timeout, `info` logging). After
//! parsing, `ABITOFJSON_REQUEST_URL` overrides the request URL and the result
//! is validated.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

use crate::errors::{Error, Result};
use crate::http::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};

pub const REQUEST_URL_ENV: &str = "ABITOFJSON_REQUEST_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub request_url: String,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout_ms(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT.as_millis() as u64
}

fn default_read_timeout_ms() -> u64 {
    DEFAULT_READ_TIMEOUT.as_millis() as u64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.http.connect_timeout_ms == 0 {
            return Err(Error::Config(
                "http.connect_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.http.read_timeout_ms == 0 {
            return Err(Error::Config(
                "http.read_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loader with environment resolution
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults with the environment applied.
    pub fn from_env() -> Result<AppConfig> {
        let mut config = AppConfig::default();
        Self::resolve_environment(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<AppConfig> {
        // serde_yaml rejects an empty document for a struct.
        let mut config: AppConfig = if content.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| Error::Config(format!("Failed to parse YAML config: {}", e)))?
        };

        Self::resolve_environment(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn resolve_environment(config: &mut AppConfig) {
        if let Ok(url) = env::var(REQUEST_URL_ENV) {
            if !url.is_empty() {
                config.request_url = url;
            }
        }
    }
}
