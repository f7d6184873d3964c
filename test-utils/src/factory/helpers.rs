//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a listing with all of its dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as company owner)
/// 2. Company (owned by the user)
/// 3. Listing (posted by the company)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, company, listing))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::company::Model,
        entity::listing::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let company = crate::factory::company::create_company(db, user.user_id).await?;
    let listing = crate::factory::listing::create_listing(db, company.company_id).await?;

    Ok((user, company, listing))
}

/// Creates a company owned by a freshly created user.
///
/// Useful when a test only needs the ownership pair and not a listing.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, company))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_company_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::company::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let company = crate::factory::company::create_company(db, user.user_id).await?;

    Ok((user, company))
}
