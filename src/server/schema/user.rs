//! Request schemas for user routes.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::schema::validators::{
    validate_birthdate, validate_password_whitespace, validate_sex,
};

/// Payload for `POST /api/user`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserSchema {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub forename: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub lastname: String,

    /// Date of birth in `MM-DD-YYYY` format; must lie in the past.
    #[validate(custom(function = validate_birthdate))]
    pub birthdate: String,

    /// Single-character sex marker: `M`, `F`, or `O`.
    #[validate(custom(function = validate_sex))]
    pub sex: String,

    #[validate(
        email(message = "Field must be a valid email address."),
        length(max = 255, message = "Email address must not exceed 255 characters.")
    )]
    pub email: String,

    /// Plaintext password; digested server-side, never stored.
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "Field must be between 1 and 100 characters long."
        ),
        custom(function = validate_password_whitespace)
    )]
    pub psw: String,
}

/// Payload for `POST /api/user/login`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserSchema {
    #[validate(
        email(message = "Field must be a valid email address."),
        length(max = 255, message = "Email address must not exceed 255 characters.")
    )]
    pub email: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub psw: String,
}

/// Payload for `PUT /api/user`. Every field is optional; absent fields keep
/// their stored values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserSchema {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub forename: Option<String>,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub lastname: Option<String>,

    /// Date of birth in `MM-DD-YYYY` format; must lie in the past.
    #[validate(custom(function = validate_birthdate))]
    pub birthdate: Option<String>,

    /// Single-character sex marker: `M`, `F`, or `O`.
    #[validate(custom(function = validate_sex))]
    pub sex: Option<String>,
}

/// Payload for `PUT /api/user/update-password`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordSchema {
    #[serde(rename = "oldPsw")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub old_psw: String,

    #[serde(rename = "newPsw")]
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "Field must be between 1 and 100 characters long."
        ),
        custom(function = validate_password_whitespace)
    )]
    pub new_psw: String,
}
