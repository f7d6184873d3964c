//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::AuthService, cache::ResponseCache};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `AuthService` holds the secret key and algorithm selection
/// - `ResponseCache` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keyed-hash service for password digests and session tokens.
    pub auth: AuthService,

    /// Process-wide time-boxed cache of prior responses.
    pub response_cache: ResponseCache,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `auth` - Configured keyed-hash service
    /// - `response_cache` - Process-wide response cache
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, auth: AuthService, response_cache: ResponseCache) -> Self {
        Self {
            db,
            auth,
            response_cache,
        }
    }
}
