//! Session resolution for protected routes.
//!
//! The session is carried by the `AUTH-LOGIN` cookie, whose value is looked
//! up directly against the `session_token` column. An absent cookie is an
//! authentication failure (401); a cookie whose token matches no user is
//! reported as not-found (404). Both failure paths evict the response-cache
//! entry for the requested URL first, so the failure is never shadowed by a
//! previously cached success body.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::cache::ResponseCache,
    state::AppState,
};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "AUTH-LOGIN";

/// Resolves session tokens to user records.
///
/// Holds references to the database connection and the response cache so a
/// failed resolution can evict the cached entry for the URL being requested.
pub struct SessionGuard<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ResponseCache,
}

impl<'a> SessionGuard<'a> {
    /// Creates a new SessionGuard instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `cache` - Reference to the process-wide response cache
    ///
    /// # Returns
    /// - `SessionGuard` - New guard instance
    pub fn new(db: &'a DatabaseConnection, cache: &'a ResponseCache) -> Self {
        Self { db, cache }
    }

    /// Resolves a cookie-borne session token to its user.
    ///
    /// # Arguments
    /// - `token` - Session token from the cookie, or `None` when the cookie was absent
    /// - `url` - Request URL (path and query), used for cache eviction on failure
    ///
    /// # Returns
    /// - `Ok(User)` - The token resolved to a logged-in user
    /// - `Err(AppError::AuthErr(NotAuthenticated))` - No cookie was present (401)
    /// - `Err(AppError::AuthErr(SessionTokenNotFound))` - The token matched no user (404)
    pub async fn require(&self, token: Option<&str>, url: &str) -> Result<User, AppError> {
        let Some(token) = token else {
            self.cache.evict(url).await;
            return Err(AuthError::NotAuthenticated.into());
        };

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_session_token(token).await? else {
            self.cache.evict(url).await;
            return Err(AuthError::SessionTokenNotFound.into());
        };

        Ok(user)
    }
}

/// The authenticated user attached to a request.
///
/// Declaring a handler parameter of this type makes the route protected: the
/// extractor reads the session cookie, resolves it through `SessionGuard`,
/// and rejects the request before the handler body runs when resolution
/// fails.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string());

        let url = parts.uri.to_string();

        let user = SessionGuard::new(&state.db, &state.response_cache)
            .require(token.as_deref(), &url)
            .await?;

        Ok(CurrentUser(user))
    }
}
