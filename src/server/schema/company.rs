//! Request schemas for company routes.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Payload for `POST /api/company`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterCompanySchema {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Field must be between 1 and 50 characters long."
    ))]
    pub company_name: String,
}
