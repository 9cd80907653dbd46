//! Add/Edit form input.

use serde::{Deserialize, Serialize};
use usermgmt_core::rules::{not_blank, valid_date};
use usermgmt_core::{format_date, parse_date, User, UserId, UserMgmtResult, ValidateExt};
use validator::Validate;

/// Raw field input of the Add and Edit panels.
///
/// Values are kept exactly as typed so a rejected form can be shown again
/// for correction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[validate(custom(function = "valid_date"))]
    pub date_of_birth: String,
}

impl UserForm {
    /// Creates a form from raw field values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Creates a form showing the fields of an existing user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            date_of_birth: format_date(user.date_of_birth),
        }
    }

    /// Validates the form and builds a user without an id.
    pub fn to_user(&self) -> UserMgmtResult<User> {
        self.validate_request()?;
        Ok(User::new(
            self.first_name.trim(),
            self.last_name.trim(),
            parse_date(&self.date_of_birth)?,
        ))
    }

    /// Validates the form and builds the user stored under `id`.
    pub fn to_user_with_id(&self, id: UserId) -> UserMgmtResult<User> {
        Ok(self.to_user()?.persisted_as(id))
    }
}
