//! Application configuration structures.

use crate::DaoConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use usermgmt_core::LoggingConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// DAO strategy selection.
    #[serde(default)]
    pub dao: DaoConfig,

    /// Database configuration, used by the SQLite strategy.
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
    /// Environment (development, test, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "usermgmt".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL.
    pub url: String,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Apply pending migrations when the pool is opened.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://usermgmt.db?mode=rwc".to_string(),
            max_connections: 1,
            connect_timeout_secs: 30,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// A private in-memory SQLite database.
    ///
    /// Limited to one connection, since every `:memory:` connection opens
    /// its own empty database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: 5,
            run_migrations: true,
        }
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "usermgmt");
        assert_eq!(config.app.environment, "development");
        assert!(config.dao.factory.is_none());
        assert!(config.database.url.starts_with("sqlite:"));
        assert!(config.database.run_migrations);
    }

    #[test]
    fn test_in_memory_database() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_database_section_uses_defaults() {
        let config: DatabaseConfig = serde_json::from_str(r#"{"url":"sqlite://x.db"}"#).unwrap();
        assert_eq!(config.url, "sqlite://x.db");
        assert_eq!(config.max_connections, 1);
        assert!(config.run_migrations);
    }
}
