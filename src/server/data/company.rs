//! Company data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::company::Company;

/// Repository providing database operations for company management.
pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    /// Creates a new CompanyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CompanyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new company owned by the given user.
    ///
    /// # Arguments
    /// - `company_name` - Unique company name
    /// - `company_owner` - `user_id` of the owning user
    ///
    /// # Returns
    /// - `Ok(Company)` - The created company
    /// - `Err(DbErr)` - Database error during insert (including unique-name violations)
    pub async fn create(
        &self,
        company_name: String,
        company_owner: i32,
    ) -> Result<Company, DbErr> {
        let entity = entity::company::ActiveModel {
            company_name: ActiveValue::Set(company_name),
            company_owner: ActiveValue::Set(company_owner),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Company::from_entity(entity))
    }

    /// Finds a company by its numeric id.
    ///
    /// # Arguments
    /// - `company_id` - Numeric id of the company
    ///
    /// # Returns
    /// - `Ok(Some(Company))` - Company found
    /// - `Ok(None)` - No company with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, company_id: i32) -> Result<Option<Company>, DbErr> {
        let entity = entity::prelude::Company::find_by_id(company_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Company::from_entity))
    }

    /// Finds a company by its unique name.
    ///
    /// # Arguments
    /// - `company_name` - Name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Company))` - Company found
    /// - `Ok(None)` - No company with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, company_name: &str) -> Result<Option<Company>, DbErr> {
        let entity = entity::prelude::Company::find()
            .filter(entity::company::Column::CompanyName.eq(company_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Company::from_entity))
    }

    /// Lists the companies owned by a user.
    ///
    /// # Arguments
    /// - `company_owner` - `user_id` of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Company>)` - Companies owned by the user (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_owner(&self, company_owner: i32) -> Result<Vec<Company>, DbErr> {
        let entities = entity::prelude::Company::find()
            .filter(entity::company::Column::CompanyOwner.eq(company_owner))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Company::from_entity).collect())
    }

    /// Deletes a company by id.
    ///
    /// Listings posted by the company are removed by the cascade on
    /// `listing.employer_id`.
    ///
    /// # Arguments
    /// - `company_id` - Numeric id of the company
    ///
    /// # Returns
    /// - `Ok(())` - Company deleted (or no matching company found)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, company_id: i32) -> Result<(), DbErr> {
        entity::prelude::Company::delete_by_id(company_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
