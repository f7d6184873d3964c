//! Request schemas for listing routes.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::server::{
    model::listing::ListListingsParam,
    schema::{
        coerce,
        validators::{validate_bool_string, validate_int_string},
    },
};

/// Payload for `POST /api/listing`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateListingSchema {
    /// `company_id` of the posting company; must reference an existing company.
    #[serde(deserialize_with = "coerce::int_lenient")]
    #[schema(value_type = i32)]
    pub employer_id: i32,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub job_title: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Field must be between 1 and 1000 characters long."
    ))]
    pub description: String,

    /// Yearly salary; at most seven digits.
    #[serde(deserialize_with = "coerce::int_lenient")]
    #[schema(value_type = i32)]
    #[validate(range(min = 0, max = 9_999_999, message = "Value must be a number"))]
    pub annual_salary: i32,

    #[serde(deserialize_with = "coerce::bool_lenient")]
    #[schema(value_type = bool)]
    pub remote: bool,
}

/// Payload for `PATCH /api/listing/{listing_id}`. Every field is optional;
/// absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateListingSchema {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Field must be between 1 and 100 characters long."
    ))]
    pub job_title: Option<String>,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Field must be between 1 and 1000 characters long."
    ))]
    pub description: Option<String>,

    /// Yearly salary; at most seven digits.
    #[serde(default, deserialize_with = "coerce::int_lenient_opt")]
    #[schema(value_type = Option<i32>)]
    #[validate(range(min = 0, max = 9_999_999, message = "Value must be a number"))]
    pub annual_salary: Option<i32>,

    #[serde(default, deserialize_with = "coerce::bool_lenient_opt")]
    #[schema(value_type = Option<bool>)]
    pub remote: Option<bool>,
}

/// Query parameters for `GET /api/listings`.
///
/// Both parameters arrive as query-string text and are validated before being
/// converted into typed listing-query parameters.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct ListListingsSchema {
    /// Maximum number of listings to return.
    #[validate(custom(function = validate_int_string))]
    pub amount: Option<String>,

    /// Order newest-first by posting date when truthy.
    #[serde(rename = "newFirst")]
    #[validate(custom(function = validate_bool_string))]
    pub new_first: Option<String>,
}

impl ListListingsSchema {
    /// Converts the validated query into typed listing-query parameters.
    ///
    /// Must be called after `validate()`; unparseable values are treated as
    /// absent rather than panicking.
    ///
    /// # Returns
    /// - `ListListingsParam` - Typed limit and ordering flag
    pub fn into_param(self) -> ListListingsParam {
        ListListingsParam {
            amount: self.amount.and_then(|s| s.trim().parse().ok()),
            new_first: self
                .new_first
                .map(|s| matches!(s.trim(), "true" | "1"))
                .unwrap_or(false),
        }
    }
}
