//! Configuration module
//!
//! Loaded from a TOML file (`~/.config/accounts-service/config.toml` by
//! default). Every section and key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::database::{DatabaseConfig, DEFAULT_DATABASE_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: Option<u32>,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: None,
        }
    }
}

impl DatabaseSection {
    /// `DATABASE_URL` overrides the configured url.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

impl From<&AppConfig> for DatabaseConfig {
    fn from(cfg: &AppConfig) -> Self {
        DatabaseConfig {
            url: cfg.database.connection_url(),
            max_connections: cfg.database.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Administrator seeded on first start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            full_name: "Administrator".to_string(),
            email: "admin@localhost.local".to_string(),
            password: "admin12345".to_string(),
        }
    }
}

impl AppConfig {
    /// Read `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("accounts-service")
        .join("config.toml")
}
