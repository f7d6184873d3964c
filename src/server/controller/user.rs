use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::NaiveDate;
use validator::Validate;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{CurrentUser, SESSION_COOKIE_NAME},
        model::user::{RegisterUserParam, UpdateUserParam},
        schema::{
            user::{LoginUserSchema, RegisterUserSchema, UpdatePasswordSchema, UpdateUserSchema},
            validators::{field_error, BIRTHDATE_FORMAT},
        },
        service::auth::AuthService,
        state::AppState,
        util::{json::JsonBody, parse::parse_id},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Parses a birthdate that already passed schema validation.
///
/// Validation guarantees the format, so a parse failure here indicates a bug
/// rather than bad input and is reported as an internal error.
fn parse_birthdate(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), BIRTHDATE_FORMAT).map_err(|_| {
        AppError::InternalError(format!(
            "Birthdate '{}' passed validation but failed to parse",
            value
        ))
    })
}

/// Builds the removal cookie that clears the session from the client.
fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build()
}

/// Register a new user.
///
/// Validates the registration fields, rejects emails that are already taken,
/// digests the password with a freshly drawn salt, and stores the new account.
/// The response never carries the digest, salt, or session token.
///
/// # Arguments
/// - `state` - Application state containing the database connection and auth service
/// - `payload` - Registration data (names, birthdate, sex, email, password)
///
/// # Returns
/// - `201 Created` - Newly registered user
/// - `400 Bad Request` - Validation failure or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/user",
    tag = USER_TAG,
    request_body = RegisterUserSchema,
    responses(
        (status = 201, description = "Successfully registered user", body = crate::model::user::UserDto),
        (status = 400, description = "Validation failure or email already registered"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterUserSchema>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user_repo = UserRepository::new(&state.db);

    if user_repo
        .find_by_email(payload.email.trim())
        .await?
        .is_some()
    {
        return Err(AppError::ValidationErr(field_error(
            "email",
            "email_taken",
            "A user with the provided email is already registered.",
        )));
    }

    let birthdate = parse_birthdate(&payload.birthdate)?;

    let salt = AuthService::random_salt();
    let psw = state.auth.digest(&salt, &payload.psw)?;

    let user = user_repo
        .create(RegisterUserParam {
            forename: payload.forename.trim().to_string(),
            lastname: payload.lastname.trim().to_string(),
            sex: payload.sex.trim().to_string(),
            birthdate,
            email: payload.email.trim().to_string(),
            psw,
            salt,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log a user in and set the session cookie.
///
/// Verifies the password by recomputing the keyed-hash digest with the user's
/// stored salt. On success a fresh session token is issued, overwriting any
/// prior token (invalidating previous sessions), and returned in the
/// `AUTH-LOGIN` cookie.
///
/// # Arguments
/// - `state` - Application state containing the database connection and auth service
/// - `jar` - Cookie jar the session cookie is added to
/// - `payload` - Login credentials (email, password)
///
/// # Returns
/// - `200 OK` - Logged in; `AUTH-LOGIN` cookie set
/// - `400 Bad Request` - Validation failure or unknown email
/// - `403 Forbidden` - Wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = USER_TAG,
    request_body = LoginUserSchema,
    responses(
        (status = 200, description = "Successfully logged in, session cookie set", body = crate::model::user::UserDto),
        (status = 400, description = "Validation failure or unknown email"),
        (status = 403, description = "Wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<LoginUserSchema>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user_repo = UserRepository::new(&state.db);

    let Some(user) = user_repo.find_by_email(payload.email.trim()).await? else {
        return Err(AppError::ValidationErr(field_error(
            "email",
            "email_unknown",
            "No user found with the provided email.",
        )));
    };

    let inserted_password = state.auth.digest(&user.salt, &payload.psw)?;

    if inserted_password != user.psw {
        return Err(AuthError::WrongPassword.into());
    }

    let session_token = state.auth.session_token(user.user_id)?;

    user_repo
        .attach_session_token(user.user_id, &session_token)
        .await?;

    let jar = jar.add(
        Cookie::build((SESSION_COOKIE_NAME, session_token))
            .path("/")
            .build(),
    );

    Ok((jar, (StatusCode::OK, Json(user.into_dto()))))
}

/// Delete the authenticated user.
///
/// Removes the account along with its companies and their listings through
/// the database cascades, and clears the session cookie so the deleted
/// account's token stops authenticating immediately.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - The authenticated user (from the session cookie)
/// - `jar` - Cookie jar the session cookie is removed from
///
/// # Returns
/// - `202 Accepted` - Account deleted; session cookie cleared
/// - `401 Unauthorized` - No session cookie
/// - `404 Not Found` - Session token resolved to no user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 202, description = "Account deleted, session cookie cleared", body = crate::model::user::UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Session token resolved to no user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = UserRepository::new(&state.db);

    user_repo.delete(user.user_id).await?;

    let jar = jar.remove(removal_cookie());

    Ok((jar, (StatusCode::ACCEPTED, Json(user.into_dto()))))
}

/// Update the authenticated user's profile.
///
/// Applies a partial update; absent fields keep their stored values. Email
/// and password are not touched here (the password has its own endpoint).
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - The authenticated user (from the session cookie)
/// - `payload` - Optional replacement values per profile field
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Validation failure
/// - `401 Unauthorized` - No session cookie
/// - `404 Not Found` - Session token resolved to no user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/user",
    tag = USER_TAG,
    request_body = UpdateUserSchema,
    responses(
        (status = 200, description = "Successfully updated user", body = crate::model::user::UserDto),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(payload): JsonBody<UpdateUserSchema>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let birthdate = payload
        .birthdate
        .as_deref()
        .map(parse_birthdate)
        .transpose()?;

    let user_repo = UserRepository::new(&state.db);

    let Some(updated) = user_repo
        .update_profile(
            user.user_id,
            UpdateUserParam {
                forename: payload.forename.map(|s| s.trim().to_string()),
                lastname: payload.lastname.map(|s| s.trim().to_string()),
                sex: payload.sex.map(|s| s.trim().to_string()),
                birthdate,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound(format!(
            "No user found with id: {}.",
            user.user_id
        )));
    };

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Change the authenticated user's password.
///
/// Verifies the old password against the stored digest, requires the new
/// password to differ, then stores the new digest. The stored session token
/// is cleared together with the cookie, so the user must log in again.
///
/// # Arguments
/// - `state` - Application state containing the database connection and auth service
/// - `user` - The authenticated user (from the session cookie)
/// - `jar` - Cookie jar the session cookie is removed from
/// - `payload` - Old and new passwords
///
/// # Returns
/// - `200 OK` - Password updated; session cleared
/// - `400 Bad Request` - Validation failure or new password equals the old one
/// - `401 Unauthorized` - No session cookie
/// - `403 Forbidden` - Old password is wrong
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/user/update-password",
    tag = USER_TAG,
    request_body = UpdatePasswordSchema,
    responses(
        (status = 200, description = "Password updated, session cleared", body = MessageDto),
        (status = 400, description = "Validation failure or unchanged password"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Old password is wrong", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
    JsonBody(payload): JsonBody<UpdatePasswordSchema>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let old_digest = state.auth.digest(&user.salt, &payload.old_psw)?;

    if old_digest != user.psw {
        return Err(AuthError::WrongOldPassword.into());
    }

    let new_digest = state.auth.digest(&user.salt, &payload.new_psw)?;

    if new_digest == user.psw {
        return Err(AppError::BadRequest(
            "New password must be different from the previous one. Please check your input and try again"
                .to_string(),
        ));
    }

    let user_repo = UserRepository::new(&state.db);

    user_repo.update_password(user.user_id, &new_digest).await?;

    let jar = jar.remove(removal_cookie());

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(MessageDto {
                message: "Password updated correctly. Please login again.".to_string(),
            }),
        ),
    ))
}

/// Get a user by id.
///
/// The id must be numeric; the lookup only runs once the format check has
/// passed. The response never carries credential columns.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Path id of the user to fetch
///
/// # Returns
/// - `200 OK` - The requested user
/// - `400 Bad Request` - Non-numeric id
/// - `401 Unauthorized` - No session cookie
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Numeric id of the user")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = crate::model::user::UserDto),
        (status = 400, description = "Non-numeric id"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No user with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id("user_id", &user_id)?;

    let user_repo = UserRepository::new(&state.db);

    let Some(user) = user_repo.find_by_id(user_id).await? else {
        return Err(AppError::NotFound(format!(
            "No user found with id: {}.",
            user_id
        )));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}
