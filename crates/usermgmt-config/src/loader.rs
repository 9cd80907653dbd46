//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use usermgmt_core::UserMgmtError;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "USERMGMT";

/// Configuration loader with runtime reload support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{dir}/default.toml` - Default values
    /// 2. `{dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{dir}/local.toml` - Local overrides
    /// 4. Environment variables with `USERMGMT_` prefix and `__` separator
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, UserMgmtError> {
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

    /// Returns the directory this loader reads from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Reloads the configuration from disk.
    ///
    /// On failure the previously loaded configuration stays in place.
    pub async fn reload(&self) -> Result<(), UserMgmtError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path) -> Result<AppConfig, UserMgmtError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("USERMGMT_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{}.toml", name));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_error)?;

        let mut app_config: AppConfig = config.try_deserialize().map_err(config_error_to_error)?;
        app_config.app.environment = environment;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| UserMgmtError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }

    /// Gets a specific configuration value by dotted key path.
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

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

fn config_error_to_error(err: ConfigError) -> UserMgmtError {
    UserMgmtError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DaoKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_default(dir: &TempDir, contents: &str) {
        fs::write(dir.path().join("default.toml"), contents).unwrap();
    }

    #[tokio::test]
    async fn test_loads_default_toml() {
        let dir = TempDir::new().unwrap();
        write_default(
            &dir,
            r#"
            [dao]
            factory = "memory"

            [logging]
            json = true
            "#,
        );

        let loader = ConfigLoader::new(dir.path()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.dao.kind().unwrap(), DaoKind::Memory);
        assert!(config.logging.json);
        assert_eq!(config.database.max_connections, 1);
    }

    #[tokio::test]
    async fn test_local_overrides_default() {
        let dir = TempDir::new().unwrap();
        write_default(&dir, "[dao]\nfactory = \"memory\"\n");
        fs::write(
            dir.path().join("local.toml"),
            "[dao]\nfactory = \"sqlite\"\n[database]\nurl = \"sqlite::memory:\"\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.dao.kind().unwrap(), DaoKind::Sqlite);
        assert_eq!(config.database.url, "sqlite::memory:");
    }

    #[tokio::test]
    async fn test_empty_directory_leaves_factory_unset() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(dir.path()).unwrap();
        assert!(loader.get().await.dao.factory.is_none());
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_default(&dir, "[dao]\nfactory = \"oracle\"\n");

        let err = ConfigLoader::new(dir.path()).unwrap_err();
        assert!(matches!(err, UserMgmtError::Configuration(_)));
        assert!(err.to_string().contains("oracle"));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        write_default(&dir, "[dao]\nfactory = \"memory\"\n");
        let loader = ConfigLoader::new(dir.path()).unwrap();

        write_default(&dir, "[dao]\nfactory = \"sqlite\"\n");
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.dao.kind().unwrap(), DaoKind::Sqlite);
    }

    #[tokio::test]
    async fn test_get_value_by_path() {
        let dir = TempDir::new().unwrap();
        write_default(&dir, "[database]\nmax_connections = 4\n");
        let loader = ConfigLoader::new(dir.path()).unwrap();

        let max: Option<u32> = loader.get_value("database.max_connections").await;
        assert_eq!(max, Some(4));
        let missing: Option<String> = loader.get_value("database.nope").await;
        assert!(missing.is_none());
    }
}
