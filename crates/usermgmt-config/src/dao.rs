//! DAO strategy configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use usermgmt_core::UserMgmtError;

/// Storage strategy backing the user DAO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaoKind {
    /// Relational store through SQLx.
    Sqlite,
    /// Deterministic in-process double.
    Memory,
}

impl DaoKind {
    /// Returns true if this strategy needs a database connection.
    #[must_use]
    pub const fn needs_database(&self) -> bool {
        matches!(self, Self::Sqlite)
    }
}

impl fmt::Display for DaoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for DaoKind {
    type Err = UserMgmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "sql" | "database" => Ok(Self::Sqlite),
            "memory" | "in-memory" | "inmemory" | "mock" => Ok(Self::Memory),
            other => Err(UserMgmtError::Configuration(format!(
                "Unknown DAO factory '{}' (expected 'sqlite' or 'memory')",
                other
            ))),
        }
    }
}

/// DAO factory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoConfig {
    /// Name of the DAO strategy. Mandatory; there is no default.
    #[serde(default)]
    pub factory: Option<String>,

    /// JSON fixture loaded into the in-memory DAO at startup.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

impl DaoConfig {
    /// Creates a configuration selecting `kind`.
    #[must_use]
    pub fn for_kind(kind: DaoKind) -> Self {
        Self {
            factory: Some(kind.to_string()),
            fixture: None,
        }
    }

    /// Resolves the configured strategy.
    ///
    /// Fails with `NotInitialized` when `dao.factory` is absent or blank,
    /// and with `Configuration` when it names an unknown strategy.
    pub fn kind(&self) -> Result<DaoKind, UserMgmtError> {
        match self.factory.as_deref().map(str::trim) {
            None | Some("") => Err(UserMgmtError::NotInitialized(
                "dao.factory is not configured".to_string(),
            )),
            Some(name) => name.parse(),
        }
    }
}
