//! Service configuration.
//!
//! Loaded from a JSON file with every field defaulted, so the service
//! runs with no file at all. `DATABASE_URL` and `CUPCAKES_PORT`
//! environment variables override the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend kind: "postgres" or "memory" (default: "postgres")
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Postgres connection string; `DATABASE_URL` overrides it
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_backend() -> String {
    "postgres".to_string()
}

fn default_database_url() -> String {
    "postgres://localhost/cupcakes".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database_url: default_database_url(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file, then apply environment
    /// overrides. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.storage.database_url = url;
            }
        }
        if let Ok(port) = std::env::var("CUPCAKES_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.storage.backend.as_str() {
            "postgres" | "memory" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unknown storage backend '{}', expected 'postgres' or 'memory'",
                    other
                )));
            }
        }

        if self.storage.backend == "postgres" && self.storage.database_url.is_empty() {
            return Err(ConfigError::Invalid(
                "database_url must be set for the postgres backend".to_string(),
            ));
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }

        Ok(())
    }
}
