//! Custom field validators shared across request schemas.

use chrono::{NaiveDate, Utc};
use validator::{ValidationError, ValidationErrors};

/// Wire format for birthdates.
pub const BIRTHDATE_FORMAT: &str = "%m-%d-%Y";

/// Validates a birthdate string.
///
/// The value must parse as a real calendar date in `MM-DD-YYYY` format and
/// lie strictly in the past.
///
/// # Arguments
/// - `value` - Raw birthdate string from the request
///
/// # Returns
/// - `Ok(())` - Valid past date
/// - `Err(ValidationError)` - Malformed date or a date not in the past
pub fn validate_birthdate(value: &str) -> Result<(), ValidationError> {
    let date = NaiveDate::parse_from_str(value.trim(), BIRTHDATE_FORMAT).map_err(|_| {
        ValidationError::new("birthdate_format").with_message(
            "Invalid birthdate format. birthdate must be in MM-DD-YYYY format with a valid date range."
                .into(),
        )
    })?;

    if date >= Utc::now().date_naive() {
        return Err(ValidationError::new("birthdate_future")
            .with_message("birthdate cannot be in the future.".into()));
    }

    Ok(())
}

/// Validates a single-character sex marker.
///
/// # Arguments
/// - `value` - Raw sex string from the request
///
/// # Returns
/// - `Ok(())` - The value is `M`, `F`, or `O`
/// - `Err(ValidationError)` - Wrong length or an unknown marker
pub fn validate_sex(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.chars().count() != 1 {
        return Err(ValidationError::new("sex_length")
            .with_message("Field must be exactly 1 character long.".into()));
    }

    if !matches!(trimmed, "M" | "F" | "O") {
        return Err(ValidationError::new("sex_value")
            .with_message("Field must be either M, F, or O.".into()));
    }

    Ok(())
}

/// Rejects passwords containing whitespace.
///
/// # Arguments
/// - `value` - Raw password string from the request
///
/// # Returns
/// - `Ok(())` - No whitespace present
/// - `Err(ValidationError)` - The password contains whitespace
pub fn validate_password_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("psw_whitespace")
            .with_message("Field must not contain whitespace.".into()));
    }

    Ok(())
}

/// Validates that a query-string value is a non-negative integer.
pub fn validate_int_string(value: &str) -> Result<(), ValidationError> {
    value
        .trim()
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("int").with_message("Value must be a number".into()))
}

/// Validates that a query-string value spells a boolean.
pub fn validate_bool_string(value: &str) -> Result<(), ValidationError> {
    match value.trim() {
        "true" | "false" | "1" | "0" => Ok(()),
        _ => Err(ValidationError::new("boolean")
            .with_message("Value must be boolean (1,0, true or false).".into())),
    }
}

/// Builds a single-field validator error list.
///
/// Cross-entity checks (email uniqueness, referenced-record existence) fail
/// with the same 400 error-list shape as field validation; this helper builds
/// that list for one field.
///
/// # Arguments
/// - `field` - Field name the error is attached to
/// - `code` - Machine-readable error code
/// - `message` - Human-readable message
///
/// # Returns
/// - `ValidationErrors` - Error list containing the single entry
pub fn field_error(
    field: &'static str,
    code: &'static str,
    message: &'static str,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code).with_message(message.into()));
    errors
}
