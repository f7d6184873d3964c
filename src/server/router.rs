use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, company as company_dto, listing as listing_dto, user as user_dto},
    server::{
        controller::{company, listing, user},
        middleware::cache,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register_user,
        user::login_user,
        user::delete_user,
        user::update_user,
        user::update_password,
        user::get_user_by_id,
        company::register_company,
        company::get_company_by_company_id,
        company::delete_company,
        listing::create_listing,
        listing::get_listing_by_id,
        listing::get_listings,
        listing::delete_listing,
        listing::update_listing,
    ),
    components(schemas(
        api::ErrorDto,
        api::MessageDto,
        user_dto::UserDto,
        company_dto::CompanyDto,
        listing_dto::ListingDto,
    )),
    tags(
        (name = "user", description = "Account registration, login, and profile management"),
        (name = "company", description = "Company registration and ownership"),
        (name = "listing", description = "Job listing publication and queries")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// All API routes live under `/api`. Protected routes declare a `CurrentUser`
/// parameter, which resolves the session cookie before the handler runs. The
/// response-cache middleware fronts the whole route table; compression and
/// request tracing wrap it.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// - `Router` - Fully configured router ready to serve
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/user",
            post(user::register_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/user/login", post(user::login_user))
        .route("/api/user/update-password", put(user::update_password))
        .route("/api/user/{user_id}", get(user::get_user_by_id))
        .route("/api/company", post(company::register_company))
        .route(
            "/api/company/{company_id}",
            get(company::get_company_by_company_id).delete(company::delete_company),
        )
        .route("/api/listing", post(listing::create_listing))
        .route("/api/listings", get(listing::get_listings))
        .route(
            "/api/listing/{listing_id}",
            get(listing::get_listing_by_id)
                .delete(listing::delete_listing)
                .patch(listing::update_listing),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cache::cache_responses,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
