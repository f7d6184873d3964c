use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::api::ErrorDto,
    server::{
        data::{company::CompanyRepository, listing::ListingRepository},
        error::{auth::AuthError, AppError},
        middleware::auth::CurrentUser,
        model::listing::{CreateListingParam, UpdateListingParam},
        schema::{
            listing::{CreateListingSchema, ListListingsSchema, UpdateListingSchema},
            validators::field_error,
        },
        state::AppState,
        util::{json::JsonBody, parse::parse_id},
    },
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static LISTING_TAG: &str = "listing";

/// Publish a new listing.
///
/// The referenced company must exist (validation phase, 400) and be owned by
/// the authenticated user (403). The posting timestamp is assigned by the
/// server.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - The authenticated user (must own the posting company)
/// - `payload` - Listing data (employer id, title, description, salary, remote flag)
///
/// # Returns
/// - `201 Created` - Newly published listing
/// - `400 Bad Request` - Validation failure or nonexistent company
/// - `401 Unauthorized` - No session cookie
/// - `403 Forbidden` - Caller does not own the company
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/listing",
    tag = LISTING_TAG,
    request_body = CreateListingSchema,
    responses(
        (status = 201, description = "Successfully published listing", body = crate::model::listing::ListingDto),
        (status = 400, description = "Validation failure or nonexistent company"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(payload): JsonBody<CreateListingSchema>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let company_repo = CompanyRepository::new(&state.db);

    let Some(company) = company_repo.find_by_id(payload.employer_id).await? else {
        return Err(AppError::ValidationErr(field_error(
            "employer_id",
            "company_missing",
            "No company found with the provided id.",
        )));
    };

    if company.company_owner != user.user_id {
        return Err(AuthError::CompanyNotOwned(user.user_id, company.company_id).into());
    }

    let listing_repo = ListingRepository::new(&state.db);

    let listing = listing_repo
        .create(CreateListingParam {
            employer_id: payload.employer_id,
            job_title: payload.job_title.trim().to_string(),
            description: payload.description.trim().to_string(),
            annual_salary: payload.annual_salary,
            remote: payload.remote,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

/// Get a listing by id.
///
/// The id must be numeric; the lookup only runs once the format check has
/// passed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `listing_id` - Path id of the listing to fetch
///
/// # Returns
/// - `200 OK` - The requested listing
/// - `400 Bad Request` - Non-numeric id
/// - `401 Unauthorized` - No session cookie
/// - `404 Not Found` - No listing with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listing/{listing_id}",
    tag = LISTING_TAG,
    params(
        ("listing_id" = String, Path, description = "Numeric id of the listing")
    ),
    responses(
        (status = 200, description = "Successfully retrieved listing", body = crate::model::listing::ListingDto),
        (status = 400, description = "Non-numeric id"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No listing with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing_by_id(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(listing_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let listing_id = parse_id("listing_id", &listing_id)?;

    let listing_repo = ListingRepository::new(&state.db);

    let Some(listing) = listing_repo.find_by_id(listing_id).await? else {
        return Err(AppError::NotFound(format!(
            "No listing found with id: {}.",
            listing_id
        )));
    };

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// List listings.
///
/// Supports an optional result limit (`amount`) and newest-first ordering
/// (`newFirst`). Without parameters all listings are returned oldest-first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `amount` and `newFirst` query parameters
///
/// # Returns
/// - `200 OK` - Matching listings
/// - `400 Bad Request` - Malformed query parameter
/// - `401 Unauthorized` - No session cookie
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = LISTING_TAG,
    params(
        ("amount" = Option<String>, Query, description = "Maximum number of listings to return"),
        ("newFirst" = Option<String>, Query, description = "Order newest-first when true")
    ),
    responses(
        (status = 200, description = "Successfully retrieved listings", body = Vec<crate::model::listing::ListingDto>),
        (status = 400, description = "Malformed query parameter"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listings(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(query): Query<ListListingsSchema>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let listing_repo = ListingRepository::new(&state.db);

    let listings = listing_repo.get_all(query.into_param()).await?;

    let dtos: Vec<_> = listings.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Delete a listing.
///
/// A nonexistent listing fails in the validation phase (400) before the
/// ownership check runs; deleting a listing of a company owned by another
/// user is forbidden (403). A successful deletion answers 201 with the
/// deleted listing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - The authenticated user (must own the posting company)
/// - `listing_id` - Path id of the listing to delete
///
/// # Returns
/// - `201 Created` - Listing deleted
/// - `400 Bad Request` - Non-numeric id or no listing with that id
/// - `401 Unauthorized` - No session cookie
/// - `403 Forbidden` - Caller does not own the listing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/listing/{listing_id}",
    tag = LISTING_TAG,
    params(
        ("listing_id" = String, Path, description = "Numeric id of the listing")
    ),
    responses(
        (status = 201, description = "Listing deleted", body = crate::model::listing::ListingDto),
        (status = 400, description = "Non-numeric id or no listing with that id"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the listing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(listing_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let listing_id = parse_id("listing_id", &listing_id)?;

    let listing_repo = ListingRepository::new(&state.db);

    // Existence is a validation concern on this route: a missing record is a
    // 400, not a 404
    let Some(listing) = listing_repo.find_by_id(listing_id).await? else {
        return Err(AppError::ValidationErr(field_error(
            "listing_id",
            "listing_missing",
            "No listing found with the provided id.",
        )));
    };

    require_listing_ownership(&state, &listing, user.user_id).await?;

    listing_repo.delete(listing_id).await?;

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

/// Update a listing.
///
/// Applies a partial update; absent fields keep their stored values. The
/// existence and ownership rules match listing deletion.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - The authenticated user (must own the posting company)
/// - `listing_id` - Path id of the listing to update
/// - `payload` - Optional replacement values per field
///
/// # Returns
/// - `200 OK` - Updated listing
/// - `400 Bad Request` - Validation failure, non-numeric id, or no listing with that id
/// - `401 Unauthorized` - No session cookie
/// - `403 Forbidden` - Caller does not own the listing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/listing/{listing_id}",
    tag = LISTING_TAG,
    params(
        ("listing_id" = String, Path, description = "Numeric id of the listing")
    ),
    request_body = UpdateListingSchema,
    responses(
        (status = 200, description = "Successfully updated listing", body = crate::model::listing::ListingDto),
        (status = 400, description = "Validation failure or no listing with that id"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own the listing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(listing_id): Path<String>,
    JsonBody(payload): JsonBody<UpdateListingSchema>,
) -> Result<impl IntoResponse, AppError> {
    let listing_id = parse_id("listing_id", &listing_id)?;

    payload.validate()?;

    let listing_repo = ListingRepository::new(&state.db);

    let Some(listing) = listing_repo.find_by_id(listing_id).await? else {
        return Err(AppError::ValidationErr(field_error(
            "listing_id",
            "listing_missing",
            "No listing found with the provided id.",
        )));
    };

    require_listing_ownership(&state, &listing, user.user_id).await?;

    let Some(updated) = listing_repo
        .update(
            listing_id,
            UpdateListingParam {
                job_title: payload.job_title.map(|s| s.trim().to_string()),
                description: payload.description.map(|s| s.trim().to_string()),
                annual_salary: payload.annual_salary,
                remote: payload.remote,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound(format!(
            "No listing found with id: {}.",
            listing_id
        )));
    };

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Checks that the user owns the company a listing belongs to.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `listing` - The listing being mutated
/// - `user_id` - Numeric id of the caller
///
/// # Returns
/// - `Ok(())` - The caller owns the posting company
/// - `Err(AppError::AuthErr(ListingNotOwned))` - The company belongs to someone else
/// - `Err(AppError::InternalError)` - The listing references a missing company
async fn require_listing_ownership(
    state: &AppState,
    listing: &crate::server::model::listing::Listing,
    user_id: i32,
) -> Result<(), AppError> {
    let company_repo = CompanyRepository::new(&state.db);

    let Some(company) = company_repo.find_by_id(listing.employer_id).await? else {
        // The cascade makes this unreachable; a hit means the schema is broken
        return Err(AppError::InternalError(format!(
            "Listing {} references missing company {}",
            listing.listing_id, listing.employer_id
        )));
    };

    if company.company_owner != user_id {
        return Err(AuthError::ListingNotOwned(user_id, listing.listing_id).into());
    }

    Ok(())
}
