use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a user account.
///
/// Deliberately omits `psw`, `salt`, and `session_token`; those columns
/// never leave the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub forename: String,
    pub lastname: String,
    pub sex: String,
    pub birthdate: NaiveDate,
    pub email: String,
}
