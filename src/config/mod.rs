use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::core::{AppError, Result};

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// SPA origin allowed to call the API; permissive when unset
    pub allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration, preferring the YAML file named by
    /// PROPMGMNT_CONFIG and falling back to plain environment variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        match env::var("PROPMGMNT_CONFIG") {
            Ok(path) => Self::from_yaml(Path::new(&path)),
            Err(_) => Self::from_env(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig {
                allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            },
        })
    }

    /// Parse a YAML environment file. DATABASE_URL still overrides the
    /// file's value so credentials stay out of checked-in config.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Cannot read config file {}: {}", path.display(), e))
        })?;

        let mut config: Config = serde_yaml::from_str(&raw).map_err(|e| {
            AppError::Configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database.url = url;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(AppError::Configuration(
                "Server host must not be empty".to_string(),
            ));
        }

        if self.database.url.is_empty() {
            return Err(AppError::Configuration(
                "Database URL must not be empty".to_string(),
            ));
        }

        if self.database.pool_size == 0 || self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database pool sizes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
