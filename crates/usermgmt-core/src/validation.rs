//! Validation utilities.

use crate::UserMgmtError;
use chrono::NaiveDate;
use validator::{Validate, ValidationErrors};

/// Locale-independent date format accepted for dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `UserMgmtError` on failure.
    fn validate_request(&self) -> Result<(), UserMgmtError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `UserMgmtError`.
///
/// Fields are reported in name order so messages are stable.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> UserMgmtError {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                (field.to_string(), message)
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ");

    UserMgmtError::Validation(message)
}

/// Parses a date of birth written in [`DATE_FORMAT`].
pub fn parse_date(value: &str) -> Result<NaiveDate, UserMgmtError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        UserMgmtError::Validation(format!(
            "date_of_birth: '{}' is not a valid date ({}): {}",
            value, DATE_FORMAT, e
        ))
    })
}

/// Formats a date the way [`parse_date`] reads it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Common validation functions.
pub mod rules {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
        }
        Ok(())
    }

    /// Validates that a string is a date in the fixed format.
    pub fn valid_date(value: &str) -> Result<(), ValidationError> {
        if NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_err() {
            return Err(ValidationError::new("invalid_date")
                .with_message("must be a date formatted as YYYY-MM-DD".into()));
        }
        Ok(())
    }
}
