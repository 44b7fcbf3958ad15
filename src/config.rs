//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built dashboard (`index.html` + wasm bundle)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Extra origins allowed to call the API. Empty means permissive.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "./cittaai-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// JSON file store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Maximum number of feedback records kept on disk
    #[serde(default = "default_feedback_limit")]
    pub feedback_limit: usize,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_feedback_limit() -> usize {
    200
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            feedback_limit: default_feedback_limit(),
        }
    }
}

/// Values reported by `GET /api/metrics` that are policy rather than data
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_sla_hours")]
    pub feedback_response_sla_hours: u32,
}

fn default_sla_hours() -> u32 {
    48
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            feedback_response_sla_hours: default_sla_hours(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "cittaai=info,tower_http=info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("cittaai").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("CITTAAI_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("CITTAAI_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid CITTAAI_PORT value {:?}", port),
            }
        }
        if let Some(dir) = var("CITTAAI_STATIC_DIR") {
            self.server.static_dir = dir;
        }
        if let Some(dir) = var("CITTAAI_DATA_DIR") {
            self.store.data_dir = dir;
        }
        if let Some(level) = var("CITTAAI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("CITTAAI_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CittaAI Beta Dashboard Configuration
#
# Environment variables override these settings:
# - CITTAAI_HOST
# - CITTAAI_PORT
# - CITTAAI_STATIC_DIR
# - CITTAAI_DATA_DIR
# - CITTAAI_LOG_LEVEL
# - CITTAAI_LOG_FORMAT

[server]
# Address the API binds to
host = "0.0.0.0"
port = 8000

# Built dashboard served on the same origin as the API (trunk build output)
static_dir = "./cittaai-ui/dist"

# Allowed CORS origins (empty = allow any origin)
cors_origins = []

[store]
# Directory holding roadmap.json and feedback_log.json
data_dir = "./data"

# Newest feedback records kept on disk
feedback_limit = 200

[metrics]
# Response SLA reported alongside feedback counts
feedback_response_sla_hours = 48

[logging]
# tracing EnvFilter directive, e.g. "info" or "cittaai=debug,tower_http=info"
level = "cittaai=info,tower_http=info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
