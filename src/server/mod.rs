//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, request validation, data access, and infrastructure
//! services. The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, ownership checks, and DTO conversion
//! - **Schema Layer** (`schema/`) - Declarative per-route request validation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Service Layer** (`service/`) - Credential hashing and the process-wide response cache
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session resolution and response caching
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, auth service, response cache)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Middleware** serves cached responses and resolves the session cookie
//! 3. **Controller** validates the request schema and any cross-entity rules
//! 4. **Controller** performs ownership checks against the authenticated user
//! 5. **Data** executes the query and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and shapes the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
