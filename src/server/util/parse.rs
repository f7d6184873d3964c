use validator::{ValidationError, ValidationErrors};

use crate::server::error::AppError;

/// Parses a numeric id from a path segment.
///
/// Path ids arrive as strings and must be validated before any lookup runs.
/// A non-numeric value fails validation the same way a schema field would,
/// producing a 400 response carrying the validator error list.
///
/// # Arguments
/// - `field` - Name of the path parameter, used as the error-list key
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::ValidationErr)` - The value is not a number
pub fn parse_id(field: &'static str, value: &str) -> Result<i32, AppError> {
    value.trim().parse::<i32>().map_err(|_| {
        let mut errors = ValidationErrors::new();
        errors.add(
            field,
            ValidationError::new("int").with_message("Value must be a number".into()),
        );
        AppError::ValidationErr(errors)
    })
}
