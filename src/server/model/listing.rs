//! Listing domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::listing::ListingDto;

/// Job listing posted by a company.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Numeric id of the listing.
    pub listing_id: i32,
    /// `company_id` of the posting company.
    pub employer_id: i32,
    /// Title of the position.
    pub job_title: String,
    /// Free-text description of the position.
    pub description: String,
    /// Server-assigned posting timestamp.
    pub posted_date: DateTime<Utc>,
    /// Yearly salary in whole currency units.
    pub annual_salary: i32,
    /// Whether the position is remote.
    pub remote: bool,
}

impl Listing {
    /// Converts an entity model to a listing domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Listing` - The converted listing domain model
    pub fn from_entity(entity: entity::listing::Model) -> Self {
        Self {
            listing_id: entity.listing_id,
            employer_id: entity.employer_id,
            job_title: entity.job_title,
            description: entity.description,
            posted_date: entity.posted_date,
            annual_salary: entity.annual_salary,
            remote: entity.remote,
        }
    }

    /// Converts the listing domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `ListingDto` - The converted listing DTO
    pub fn into_dto(self) -> ListingDto {
        ListingDto {
            listing_id: self.listing_id,
            employer_id: self.employer_id,
            job_title: self.job_title,
            description: self.description,
            posted_date: self.posted_date,
            annual_salary: self.annual_salary,
            remote: self.remote,
        }
    }
}

/// Parameters for publishing a new listing.
///
/// `posted_date` is not part of the parameters; the repository assigns it
/// from the server clock at insert time.
#[derive(Debug, Clone)]
pub struct CreateListingParam {
    /// `company_id` of the posting company.
    pub employer_id: i32,
    /// Title of the position.
    pub job_title: String,
    /// Free-text description of the position.
    pub description: String,
    /// Yearly salary in whole currency units.
    pub annual_salary: i32,
    /// Whether the position is remote.
    pub remote: bool,
}

/// Parameters for a partial listing update.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateListingParam {
    /// New job title, if changing.
    pub job_title: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New annual salary, if changing.
    pub annual_salary: Option<i32>,
    /// New remote flag, if changing.
    pub remote: Option<bool>,
}

/// Parameters for querying the listing collection.
#[derive(Debug, Clone, Default)]
pub struct ListListingsParam {
    /// Maximum number of listings to return; `None` returns all.
    pub amount: Option<u64>,
    /// Order newest-first by posting date when set.
    pub new_first: bool,
}
