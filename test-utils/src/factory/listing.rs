//! Listing factory for creating test listing entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// Provides a builder pattern for creating listing entities with default
/// values that can be overridden as needed for specific test scenarios.
pub struct ListingFactory<'a> {
    db: &'a DatabaseConnection,
    employer_id: i32,
    job_title: String,
    description: String,
    posted_date: chrono::DateTime<Utc>,
    annual_salary: i32,
    remote: bool,
}

impl<'a> ListingFactory<'a> {
    /// Creates a new ListingFactory with default values.
    ///
    /// Defaults:
    /// - job_title: `"Job {id}"` where id is auto-incremented
    /// - description: `"A job description"`
    /// - posted_date: now
    /// - annual_salary: `50000`
    /// - remote: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `employer_id` - `company_id` of the posting company (must exist)
    ///
    /// # Returns
    /// - `ListingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, employer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            employer_id,
            job_title: format!("Job {}", id),
            description: "A job description".to_string(),
            posted_date: Utc::now(),
            annual_salary: 50000,
            remote: false,
        }
    }

    /// Sets the job title.
    ///
    /// # Arguments
    /// - `job_title` - Title of the position
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    /// Sets the description.
    ///
    /// # Arguments
    /// - `description` - Free-text description of the position
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the posted date.
    ///
    /// Useful for tests that need a deterministic ordering of listings.
    ///
    /// # Arguments
    /// - `posted_date` - Timestamp to record as the posting time
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn posted_date(mut self, posted_date: chrono::DateTime<Utc>) -> Self {
        self.posted_date = posted_date;
        self
    }

    /// Sets the annual salary.
    ///
    /// # Arguments
    /// - `annual_salary` - Yearly salary in whole currency units
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn annual_salary(mut self, annual_salary: i32) -> Self {
        self.annual_salary = annual_salary;
        self
    }

    /// Sets the remote flag.
    ///
    /// # Arguments
    /// - `remote` - Whether the position is remote
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    /// Builds and inserts the listing entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::listing::Model)` - Created listing entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::listing::Model, DbErr> {
        entity::listing::ActiveModel {
            employer_id: ActiveValue::Set(self.employer_id),
            job_title: ActiveValue::Set(self.job_title),
            description: ActiveValue::Set(self.description),
            posted_date: ActiveValue::Set(self.posted_date),
            annual_salary: ActiveValue::Set(self.annual_salary),
            remote: ActiveValue::Set(self.remote),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing with default values for the given company.
///
/// Shorthand for `ListingFactory::new(db, employer_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `employer_id` - `company_id` of the posting company
///
/// # Returns
/// - `Ok(entity::listing::Model)` - Created listing entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_listing(
    db: &DatabaseConnection,
    employer_id: i32,
) -> Result<entity::listing::Model, DbErr> {
    ListingFactory::new(db, employer_id).build().await
}
