use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub company_id: i32,
    pub company_name: String,
    pub company_owner: i32,
}
