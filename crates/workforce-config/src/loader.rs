//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use workforce_core::WorkforceError;

/// Configuration loader with runtime refresh support.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `WORKFORCE__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, WorkforceError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), WorkforceError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, WorkforceError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("WORKFORCE_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        debug!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("WORKFORCE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_workforce_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_workforce_error)?;

        app_config.app.environment = environment;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration, reporting every problem at once.
    fn validate_config(config: &AppConfig) -> Result<(), WorkforceError> {
        ConfigValidator::validate(config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            WorkforceError::Configuration(message)
        })
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_workforce_error(err: ConfigError) -> WorkforceError {
    WorkforceError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent").to_string_lossy()).unwrap();

        let config = loader.get().await;
        assert_eq!(config.app.name, "workforce");
        assert!(config.database.url.starts_with("sqlite:"));
    }

    #[tokio::test]
    async fn test_default_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[database]\nurl = \"sqlite::memory:\"\nmax_connections = 1\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;

        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.database.connect_timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_local_file_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[logging]\nlevel = \"info\"\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[logging]\nlevel = \"debug\"\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let level: Option<String> = loader.get_value("logging.level").await;

        assert_eq!(level.as_deref(), Some("debug"));
    }

    #[tokio::test]
    async fn test_invalid_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[database]\nmin_connections = 8\nmax_connections = 2\n",
        )
        .unwrap();

        let err = ConfigLoader::new(dir.path().to_string_lossy()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("Invalid pool size"));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        fs::write(&path, "[database]\nmax_connections = 2\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get().await.database.max_connections, 2);

        fs::write(&path, "[database]\nmax_connections = 6\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.database.max_connections, 6);
    }
}
