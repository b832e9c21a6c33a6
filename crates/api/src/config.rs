//! Service Configuration
//!
//! Built from defaults, then an optional TOML/JSON/YAML file, then `MENTOR_*`
//! environment variables (`__` separates nested keys, lists are comma separated).

use config::{Config, ConfigError, Environment, File};
use data_validator::ValidationConfig;
use inference_engine::ArtifactPaths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file, extension resolved by the `config` crate
pub const DEFAULT_CONFIG_FILE: &str = "config/mentor";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "MENTOR_CONFIG";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address
    pub bind_addr: String,
    /// Origins allowed by CORS; `"*"` allows any origin without credentials
    pub allowed_origins: Vec<String>,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Max log level (`trace`..`error`)
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
    /// Install the Prometheus recorder and serve `/metrics`
    pub metrics_enabled: bool,
    /// Inclusive answer range; unset accepts any integer
    pub answer_range: Option<(i64, i64)>,
    /// Model artifact locations
    pub artifacts: ArtifactPaths,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_secs: 10,
            log_level: "info".to_string(),
            log_json: false,
            metrics_enabled: true,
            answer_range: None,
            artifacts: ArtifactPaths::default(),
        }
    }
}

impl ApiConfig {
    /// Load from the config file (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Config::builder()
            .add_source(File::with_name(&file).required(false))
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins")
                    .with_list_parse_key("answer_range")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load from a single file, ignoring the environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    /// Answer validation settings derived from this config
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            answer_range: self.answer_range,
            ..Default::default()
        }
    }
}
