//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for usermgmt.
///
/// Store failures (`Database`, `NotFound`) surface to the navigation layer,
/// which keeps the active panel open. `NotInitialized` and `Configuration`
/// only happen during startup and are fatal there.
#[derive(Error, Debug)]
pub enum UserMgmtError {
    // ============ Store Errors ============
    /// Record not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Database error (unreachable store, constraint or precondition violation)
    #[error("Database error: {0}")]
    Database(String),

    // ============ Input Errors ============
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Startup Errors ============
    /// DAO factory used without configuration
    #[error("Not initialized: {0}")]
    NotInitialized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UserMgmtError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotInitialized(_) => "NOT_INITIALIZED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not-initialized error.
    #[must_use]
    pub fn not_initialized<T: Into<String>>(message: T) -> Self {
        Self::NotInitialized(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error came from the store.
    #[must_use]
    pub const fn is_database_failure(&self) -> bool {
        matches!(self, Self::Database(_) | Self::NotFound { .. })
    }

    /// Checks if this error should abort startup.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::NotInitialized(_) | Self::Configuration(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for UserMgmtError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for UserMgmtError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Database(format!("Migration failed: {}", err))
    }
}

impl From<serde_json::Error> for UserMgmtError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

impl From<std::io::Error> for UserMgmtError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("I/O error: {}", err))
    }
}
