//! User entity.

use crate::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person managed by the application.
///
/// `id` is `None` until the store assigns one on create and never changes
/// afterwards. Two users are equal only when all four fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    #[serde(default)]
    pub id: Option<UserId>,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Date of birth, no time component.
    pub date_of_birth: NaiveDate,
}

impl User {
    /// Creates a user that has not been persisted yet.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
        }
    }

    /// Creates a user that already carries a store id.
    #[must_use]
    pub fn with_id(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(first_name, last_name, date_of_birth)
        }
    }

    /// Returns a copy of this user bound to `id`.
    #[must_use]
    pub fn persisted_as(&self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    /// Returns the user's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks if the user has been persisted.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
