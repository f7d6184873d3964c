//! Listing data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder, QuerySelect,
};

use crate::server::model::listing::{
    CreateListingParam, ListListingsParam, Listing, UpdateListingParam,
};

/// Repository providing database operations for listing management.
pub struct ListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingRepository<'a> {
    /// Creates a new ListingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ListingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new listing for a company.
    ///
    /// `posted_date` is taken from the server clock at insert time; the
    /// client never supplies it.
    ///
    /// # Arguments
    /// - `param` - Listing fields from the publish request
    ///
    /// # Returns
    /// - `Ok(Listing)` - The created listing
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateListingParam) -> Result<Listing, DbErr> {
        let entity = entity::listing::ActiveModel {
            employer_id: ActiveValue::Set(param.employer_id),
            job_title: ActiveValue::Set(param.job_title),
            description: ActiveValue::Set(param.description),
            posted_date: ActiveValue::Set(Utc::now()),
            annual_salary: ActiveValue::Set(param.annual_salary),
            remote: ActiveValue::Set(param.remote),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Listing::from_entity(entity))
    }

    /// Finds a listing by its numeric id.
    ///
    /// # Arguments
    /// - `listing_id` - Numeric id of the listing
    ///
    /// # Returns
    /// - `Ok(Some(Listing))` - Listing found
    /// - `Ok(None)` - No listing with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, listing_id: i32) -> Result<Option<Listing>, DbErr> {
        let entity = entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Listing::from_entity))
    }

    /// Lists listings, optionally limited and ordered newest-first.
    ///
    /// Ordering is by posting date: descending when `new_first` is set,
    /// ascending otherwise.
    ///
    /// # Arguments
    /// - `param` - Optional result limit and ordering flag
    ///
    /// # Returns
    /// - `Ok(Vec<Listing>)` - Matching listings (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, param: ListListingsParam) -> Result<Vec<Listing>, DbErr> {
        let mut query = entity::prelude::Listing::find();

        query = if param.new_first {
            query.order_by_desc(entity::listing::Column::PostedDate)
        } else {
            query.order_by_asc(entity::listing::Column::PostedDate)
        };

        if let Some(amount) = param.amount {
            query = query.limit(amount);
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Listing::from_entity).collect())
    }

    /// Applies a partial update to a listing.
    ///
    /// Fields left as `None` in the parameters keep their stored values. When
    /// every field is `None` the stored row is returned unchanged. The posting
    /// date is never touched by updates.
    ///
    /// # Arguments
    /// - `listing_id` - Numeric id of the listing
    /// - `param` - Optional replacement values per field
    ///
    /// # Returns
    /// - `Ok(Some(Listing))` - Updated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        listing_id: i32,
        param: UpdateListingParam,
    ) -> Result<Option<Listing>, DbErr> {
        let Some(listing) = entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.job_title.is_none()
            && param.description.is_none()
            && param.annual_salary.is_none()
            && param.remote.is_none()
        {
            return Ok(Some(Listing::from_entity(listing)));
        }

        let mut active = listing.into_active_model();

        if let Some(job_title) = param.job_title {
            active.job_title = ActiveValue::Set(job_title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(annual_salary) = param.annual_salary {
            active.annual_salary = ActiveValue::Set(annual_salary);
        }
        if let Some(remote) = param.remote {
            active.remote = ActiveValue::Set(remote);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Listing::from_entity(updated)))
    }

    /// Deletes a listing by id.
    ///
    /// # Arguments
    /// - `listing_id` - Numeric id of the listing
    ///
    /// # Returns
    /// - `Ok(())` - Listing deleted (or no matching listing found)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, listing_id: i32) -> Result<(), DbErr> {
        entity::prelude::Listing::delete_by_id(listing_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
