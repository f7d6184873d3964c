//! Company domain model.

use crate::model::company::CompanyDto;

/// Company registered by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    /// Numeric id of the company.
    pub company_id: i32,
    /// Unique company name.
    pub company_name: String,
    /// `user_id` of the owning user.
    pub company_owner: i32,
}

impl Company {
    /// Converts an entity model to a company domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Company` - The converted company domain model
    pub fn from_entity(entity: entity::company::Model) -> Self {
        Self {
            company_id: entity.company_id,
            company_name: entity.company_name,
            company_owner: entity.company_owner,
        }
    }

    /// Converts the company domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `CompanyDto` - The converted company DTO
    pub fn into_dto(self) -> CompanyDto {
        CompanyDto {
            company_id: self.company_id,
            company_name: self.company_name,
            company_owner: self.company_owner,
        }
    }
}
