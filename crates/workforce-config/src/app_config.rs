//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "workforce".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Database configuration.
///
/// The pool is the connection provider shared by every DAO. Setting
/// `max_connections = 1` serializes all statements on one connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL.
    pub url: String,
    /// Minimum connection pool size.
    pub min_connections: u32,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
    /// Enable SQL statement logging.
    pub log_queries: bool,
    /// Apply embedded migrations on startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://workforce.db?mode=rwc".to_string(),
            min_connections: 1,
            max_connections: 4,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            log_queries: false,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database.
    ///
    /// A single connection is kept open for the pool lifetime; SQLite
    /// drops an in-memory database when its last connection closes.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            min_connections: 1,
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Returns true if the URL names an in-memory database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the idle timeout as a Duration.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Log format (json, pretty).
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Returns true if logs should be emitted as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_config() {
        let config = DatabaseConfig::default();
        assert!(config.url.starts_with("sqlite://"));
        assert!(config.min_connections <= config.max_connections);
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_in_memory_uses_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_logging_format() {
        assert!(!LoggingConfig::default().is_json());
        let json = LoggingConfig {
            format: "JSON".to_string(),
            ..LoggingConfig::default()
        };
        assert!(json.is_json());
    }
}
