//! Response caching middleware.
//!
//! Sits in front of the router and serves repeat GET requests from the
//! process-wide response cache. Successful GET responses are buffered and
//! stored under their URL with the cache's fixed TTL; non-GET requests and
//! error responses pass through untouched. Cache entries are evicted by the
//! session guard when authentication fails for their URL.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::{
    error::InternalServerError,
    service::cache::CachedResponse,
    state::AppState,
};

/// Serves and populates the response cache for GET requests.
///
/// # Arguments
/// - `state` - Application state carrying the response cache
/// - `request` - The incoming request
/// - `next` - The rest of the middleware/handler chain
///
/// # Returns
/// - The cached response for a fresh entry, otherwise the live response
///   (stored in the cache when it is a successful GET)
pub async fn cache_responses(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let url = request.uri().to_string();

    if let Some(cached) = state.response_cache.get(&url).await {
        return cached.into_response();
    }

    let response = next.run(request).await;

    if !response.status().is_success() {
        return response;
    }

    let (parts, body) = response.into_parts();

    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let cached = CachedResponse {
                status: parts.status,
                content_type: parts.headers.get(header::CONTENT_TYPE).cloned(),
                body: bytes.clone(),
            };

            state.response_cache.insert(url, cached).await;

            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => InternalServerError(err).into_response(),
    }
}
