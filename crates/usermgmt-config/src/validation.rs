//! Configuration validation module.
//!
//! Collects every problem in one pass so startup fails with a complete
//! report instead of one error at a time.

use crate::{AppConfig, DaoKind};
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// `dao.factory` names an unknown strategy.
    UnknownDaoFactory { value: String },
    /// Database URL is empty while the SQLite strategy is selected.
    MissingDatabaseUrl,
    /// Database URL does not use the sqlite scheme.
    UnsupportedDatabaseUrl { url: String },
    /// Pool size is zero or too large.
    InvalidPoolSize { value: u32, maximum: u32 },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Fixture configured for a strategy that cannot load it.
    FixtureWithoutMemoryDao,
    /// Log filter is empty.
    EmptyLogFilter,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDaoFactory { value } => {
                write!(f, "Unknown DAO factory '{}' (expected 'sqlite' or 'memory')", value)
            }
            Self::MissingDatabaseUrl => {
                write!(f, "Database URL is required for the sqlite DAO factory")
            }
            Self::UnsupportedDatabaseUrl { url } => {
                write!(f, "Unsupported database URL '{}' (expected a sqlite: URL)", url)
            }
            Self::InvalidPoolSize { value, maximum } => {
                write!(f, "Invalid pool size: {} (must be between 1 and {})", value, maximum)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{}' must be positive, got {}", name, value)
            }
            Self::FixtureWithoutMemoryDao => {
                write!(f, "dao.fixture is only supported with the memory DAO factory")
            }
            Self::EmptyLogFilter => write!(f, "logging.filter must not be empty"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 64;

    /// Validates the entire application configuration.
    ///
    /// An absent `dao.factory` is not reported here; `DaoFactory::init`
    /// rejects it as not initialized.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let kind = match config.dao.factory.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => match name.parse::<DaoKind>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.push(ConfigValidationError::UnknownDaoFactory {
                        value: name.to_string(),
                    });
                    None
                }
            },
        };

        if kind == Some(DaoKind::Sqlite) {
            Self::validate_database(&config.database, &mut errors);
        }

        if config.dao.fixture.is_some() && kind.is_some_and(|k| k != DaoKind::Memory) {
            errors.push(ConfigValidationError::FixtureWithoutMemoryDao);
        }

        if config.logging.filter.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyLogFilter);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.trim().is_empty() {
            errors.push(ConfigValidationError::MissingDatabaseUrl);
        } else if !config.url.starts_with("sqlite:") {
            errors.push(ConfigValidationError::UnsupportedDatabaseUrl {
                url: config.url.clone(),
            });
        }

        if config.max_connections == 0 || config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::InvalidPoolSize {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
                value: config.connect_timeout_secs,
            });
        }
    }
}

/// Formats validation errors into a single message.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
