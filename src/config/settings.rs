//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

/// Environment variable that overrides the configuration file path
pub const CONFIG_PATH_ENV: &str = "GOPHER_API_CONFIG";

/// Prefix for environment overrides, e.g. `GOPHER_API__SERVER__PORT`
const ENV_PREFIX: &str = "GOPHER_API";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub docs: DocsConfig,
    pub validation: ValidationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub cors_permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    30
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// API documentation (Swagger UI / OpenAPI) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// Limits applied to incoming gopher payloads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_id_length")]
    pub max_id_length: usize,
}

fn default_max_name_length() -> usize {
    256
}

fn default_max_id_length() -> usize {
    64
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_id_length: default_max_id_length(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file and environment variables
    ///
    /// The file path is taken from `GOPHER_API_CONFIG` when set, otherwise
    /// `config/server.yaml`. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_path(path)
    }

    /// Load settings from a specific configuration file path (YAML or TOML)
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Determine file format
        let format = if path.extension().map_or(false, |ext| ext == "toml") {
            FileFormat::Toml
        } else {
            FileFormat::Yaml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("server.request_timeout_secs", default_request_timeout())?
            .set_default("server.cors_permissive", false)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format().to_string())?
            .set_default("docs.enabled", true)?
            .set_default("validation.max_name_length", default_max_name_length() as u64)?
            .set_default("validation.max_id_length", default_max_id_length() as u64)?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        config_builder = config_builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = config_builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Request timeout must be at least 1 second".to_string(),
            )));
        }

        if self.validation.max_name_length == 0 || self.validation.max_id_length == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Validation length limits must be greater than 0".to_string(),
            )));
        }

        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                request_timeout_secs: default_request_timeout(),
                cors_permissive: false,
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            docs: DocsConfig { enabled: true },
            validation: ValidationConfig::default(),
        }
    }
}
