//! Display text catalog.

use std::collections::HashMap;
use tracing::{debug, warn};
use usermgmt_core::{UserMgmtError, UserMgmtResult};

const EMBEDDED_MESSAGES: &str = include_str!("../resources/messages.toml");

/// Labels looked up by dotted key.
///
/// Nested TOML tables are flattened, so `userTableModel.first.name` in the
/// source file is looked up as exactly that string.
#[derive(Debug, Clone, Default)]
pub struct TextCatalog {
    entries: HashMap<String, String>,
}

impl TextCatalog {
    /// Loads the catalog bundled with the binary.
    pub fn embedded() -> UserMgmtResult<Self> {
        Self::from_toml_str(EMBEDDED_MESSAGES)
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(source: &str) -> UserMgmtResult<Self> {
        let table: toml::Table = source
            .parse()
            .map_err(|e| UserMgmtError::Configuration(format!("Invalid message catalog: {}", e)))?;

        let mut entries = HashMap::new();
        flatten("", &table, &mut entries);
        debug!("Loaded {} catalog entries", entries.len());
        Ok(Self { entries })
    }

    /// Returns the label for `key`, or the key itself when it is missing.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(value) => value.as_str(),
            None => {
                warn!("Missing catalog entry: {}", key);
                key
            }
        }
    }

    /// Returns true if `key` has an entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, table: &toml::Table, entries: &mut HashMap<String, String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            toml::Value::Table(nested) => flatten(&path, nested, entries),
            toml::Value::String(text) => {
                entries.insert(path, text.clone());
            }
            other => {
                entries.insert(path, other.to_string());
            }
        }
    }
}
