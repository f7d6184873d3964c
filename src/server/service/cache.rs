//! Process-wide time-boxed cache of HTTP responses.
//!
//! This module provides the `ResponseCache` used by the caching middleware to
//! serve repeat requests without re-running handlers. Entries are keyed by the
//! request URL (path and query) and expire after a fixed TTL. Entries are also
//! evicted eagerly when authentication fails for their URL, so a 401 is never
//! shadowed by a previously cached success body.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for cached responses.
const RESPONSE_CACHE_TTL_SECONDS: u64 = 300;

/// Cached copy of a previously produced response.
#[derive(Clone)]
pub struct CachedResponse {
    /// Status code of the original response.
    pub status: StatusCode,
    /// Content type of the original response, if one was set.
    pub content_type: Option<HeaderValue>,
    /// Buffered response body.
    pub body: Bytes,
}

impl IntoResponse for CachedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

/// Stored cache entry with expiration timestamp.
#[derive(Clone)]
struct CacheEntry {
    response: CachedResponse,
    expires_at: Instant,
}

impl CacheEntry {
    /// Checks if the entry has expired.
    ///
    /// # Returns
    /// - `true` - Entry has expired
    /// - `false` - Entry is still fresh
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Process-wide response cache keyed by request URL.
///
/// Entries are stored with an `Instant`-based expiry and removed lazily when a
/// stale entry is read, or eagerly through `evict`. The cache is shared across
/// all request handlers via `Arc` and safe for concurrent use.
#[derive(Clone)]
pub struct ResponseCache {
    /// Cached responses keyed by request URL (path and query).
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl ResponseCache {
    /// Creates a new empty response cache.
    ///
    /// # Returns
    /// - `ResponseCache` - New cache instance with no entries
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Looks up a fresh cached response for the given URL.
    ///
    /// Expired entries are removed on read and reported as a miss.
    ///
    /// # Arguments
    /// - `url` - Request URL (path and query)
    ///
    /// # Returns
    /// - `Some(CachedResponse)` - A fresh entry exists for the URL
    /// - `None` - No entry, or the entry had expired
    pub async fn get(&self, url: &str) -> Option<CachedResponse> {
        {
            let entries = self.entries.read().await;
            match entries.get(url) {
                Some(entry) if !entry.is_expired() => return Some(entry.response.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Entry exists but expired; drop it under the write lock
        self.entries.write().await.remove(url);
        None
    }

    /// Stores a response for the given URL with the default TTL.
    ///
    /// Any previous entry for the URL is replaced.
    ///
    /// # Arguments
    /// - `url` - Request URL (path and query)
    /// - `response` - Buffered response to cache
    pub async fn insert(&self, url: String, response: CachedResponse) {
        self.insert_with_ttl(
            url,
            response,
            Duration::from_secs(RESPONSE_CACHE_TTL_SECONDS),
        )
        .await;
    }

    /// Stores a response for the given URL with an explicit TTL.
    ///
    /// # Arguments
    /// - `url` - Request URL (path and query)
    /// - `response` - Buffered response to cache
    /// - `ttl` - How long the entry stays fresh
    pub async fn insert_with_ttl(&self, url: String, response: CachedResponse, ttl: Duration) {
        let entry = CacheEntry {
            response,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(url, entry);
    }

    /// Removes the cache entry for the given URL, if any.
    ///
    /// Called by the session middleware when authentication fails for a URL so
    /// that the failure response is not masked by a cached success body.
    ///
    /// # Arguments
    /// - `url` - Request URL (path and query)
    pub async fn evict(&self, url: &str) {
        self.entries.write().await.remove(url);
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
