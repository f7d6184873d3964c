//! Company factory for creating test company entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test companies with customizable fields.
///
/// Provides a builder pattern for creating company entities with default
/// values that can be overridden as needed for specific test scenarios.
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    company_name: String,
    company_owner: i32,
}

impl<'a> CompanyFactory<'a> {
    /// Creates a new CompanyFactory with default values.
    ///
    /// Defaults:
    /// - company_name: `"Company {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `company_owner` - `user_id` of the owning user (must exist)
    ///
    /// # Returns
    /// - `CompanyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, company_owner: i32) -> Self {
        let id = next_id();
        Self {
            db,
            company_name: format!("Company {}", id),
            company_owner,
        }
    }

    /// Sets the company name.
    ///
    /// # Arguments
    /// - `company_name` - Unique company name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    /// Builds and inserts the company entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::company::Model)` - Created company entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            company_name: ActiveValue::Set(self.company_name),
            company_owner: ActiveValue::Set(self.company_owner),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a company with default values owned by the given user.
///
/// Shorthand for `CompanyFactory::new(db, company_owner).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `company_owner` - `user_id` of the owning user
///
/// # Returns
/// - `Ok(entity::company::Model)` - Created company entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_company(
    db: &DatabaseConnection,
    company_owner: i32,
) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db, company_owner).build().await
}
