use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::api::ErrorDto,
    server::{
        data::company::CompanyRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::CurrentUser,
        schema::{company::RegisterCompanySchema, validators::field_error},
        state::AppState,
        util::{json::JsonBody, parse::parse_id},
    },
};

/// Tag for grouping company endpoints in OpenAPI documentation
pub static COMPANY_TAG: &str = "company";

/// Register a new company.
///
/// The company is owned by the authenticated user. Company names are unique;
/// a name that is already registered fails in the validation phase.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - The authenticated user (becomes the owner)
/// - `payload` - Company registration data (name)
///
/// # Returns
/// - `201 Created` - Newly registered company
/// - `400 Bad Request` - Validation failure or name already exists
/// - `401 Unauthorized` - No session cookie
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/company",
    tag = COMPANY_TAG,
    request_body = RegisterCompanySchema,
    responses(
        (status = 201, description = "Successfully registered company", body = crate::model::company::CompanyDto),
        (status = 400, description = "Validation failure or name already exists"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_company(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(payload): JsonBody<RegisterCompanySchema>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let company_repo = CompanyRepository::new(&state.db);

    if company_repo
        .find_by_name(payload.company_name.trim())
        .await?
        .is_some()
    {
        return Err(AppError::ValidationErr(field_error(
            "company_name",
            "company_name_taken",
            "A company with the provided name already exists.",
        )));
    }

    let company = company_repo
        .create(payload.company_name.trim().to_string(), user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(company.into_dto())))
}

/// Get a company by id.
///
/// The id must be numeric; the lookup only runs once the format check has
/// passed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `company_id` - Path id of the company to fetch
///
/// # Returns
/// - `200 OK` - The requested company
/// - `400 Bad Request` - Non-numeric id
/// - `401 Unauthorized` - No session cookie
/// - `404 Not Found` - No company with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/company/{company_id}",
    tag = COMPANY_TAG,
    params(
        ("company_id" = String, Path, description = "Numeric id of the company")
    ),
    responses(
        (status = 200, description = "Successfully retrieved company", body = crate::model::company::CompanyDto),
        (status = 400, description = "Non-numeric id"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No company with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company_by_company_id(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company_id = parse_id("company_id", &company_id)?;

    let company_repo = CompanyRepository::new(&state.db);

    let Some(company) = company_repo.find_by_id(company_id).await? else {
        return Err(AppError::NotFound(format!(
            "No company found with id: {}.",
            company_id
        )));
    };

    Ok((StatusCode::OK, Json(company.into_dto())))
}

/// Delete a company.
///
/// A nonexistent company fails in the validation phase (400) before the
/// ownership check runs; deleting another user's company is forbidden (403).
/// Listings posted by the company are removed by the database cascade.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - The authenticated user (must be the owner)
/// - `company_id` - Path id of the company to delete
///
/// # Returns
/// - `202 Accepted` - Company deleted
/// - `400 Bad Request` - Non-numeric id or no company with that id
/// - `401 Unauthorized` - No session cookie
/// - `403 Forbidden` - Caller does not own the company
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/company/{company_id}",
    tag = COMPANY_TAG,
    params(
        ("company_id" = String, Path, description = "Numeric id of the company")
    ),
    responses(
        (status = 202, description = "Company deleted", body = crate::model::company::CompanyDto),
        (status = 400, description = "Non-numeric id or no company with that id"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_company(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company_id = parse_id("company_id", &company_id)?;

    let company_repo = CompanyRepository::new(&state.db);

    // Existence is a validation concern on this route: a missing record is a
    // 400, not a 404
    let Some(company) = company_repo.find_by_id(company_id).await? else {
        return Err(AppError::ValidationErr(field_error(
            "company_id",
            "company_missing",
            "No company found with the provided id.",
        )));
    };

    if company.company_owner != user.user_id {
        return Err(AuthError::CompanyNotOwned(user.user_id, company_id).into());
    }

    company_repo.delete(company_id).await?;

    Ok((StatusCode::ACCEPTED, Json(company.into_dto())))
}
