use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub listing_id: i32,
    pub employer_id: i32,
    pub job_title: String,
    pub description: String,
    pub posted_date: DateTime<Utc>,
    pub annual_salary: i32,
    pub remote: bool,
}
