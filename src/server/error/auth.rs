use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No session cookie was present on the request.
    ///
    /// Results in a 401 Unauthorized response. The response-cache entry for
    /// the requested URL is evicted before this error is raised so the 401 is
    /// never shadowed by a previously cached success body.
    #[error("Request carried no session cookie")]
    NotAuthenticated,

    /// A session cookie was present but its token matched no user row.
    ///
    /// Results in a 404 Not Found response.
    #[error("Session token did not resolve to a user")]
    SessionTokenNotFound,

    /// Login attempt with a password that does not match the stored digest.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Password digest mismatch during login")]
    WrongPassword,

    /// Password change attempt where the supplied old password was wrong.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Old password digest mismatch during password update")]
    WrongOldPassword,

    /// Mutation attempted on a company owned by a different user.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - `user_id` of the caller, `company_id` of the target
    #[error("User {0} does not own company {1}")]
    CompanyNotOwned(i32, i32),

    /// Mutation attempted on a listing whose company is owned by a different user.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - `user_id` of the caller, `listing_id` of the target
    #[error("User {0} does not own listing {1}")]
    ListingNotOwned(i32, i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication and authorization errors to status codes and
/// client-facing messages:
/// - `NotAuthenticated` → 401 Unauthorized
/// - `SessionTokenNotFound` → 404 Not Found
/// - `WrongPassword` / `WrongOldPassword` → 403 Forbidden
/// - `CompanyNotOwned` / `ListingNotOwned` → 403 Forbidden
///
/// # Returns
/// - Response with the mapped status code and a JSON error body
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "User is not authenticated. Please login and try again.",
            ),
            Self::SessionTokenNotFound => (
                StatusCode::NOT_FOUND,
                "No user found with the provided session token.",
            ),
            Self::WrongPassword => (
                StatusCode::FORBIDDEN,
                "Password provided is incorrect. Check your input and try again.",
            ),
            Self::WrongOldPassword => (
                StatusCode::FORBIDDEN,
                "Old password is incorrect. Please check your input and try again",
            ),
            Self::CompanyNotOwned(_, _) => (
                StatusCode::FORBIDDEN,
                "User doesn't own the company. Please check your input and retry.",
            ),
            Self::ListingNotOwned(_, _) => (
                StatusCode::FORBIDDEN,
                "User doesn't own the listing. Please check your input and retry.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
