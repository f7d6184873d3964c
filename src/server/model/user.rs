//! User domain models and parameters.
//!
//! Provides the server-side user model carrying credential columns alongside
//! profile data, plus parameter types for registration and profile updates.
//! The credential fields exist only on this side of the DTO boundary;
//! `into_dto` drops them.

use chrono::NaiveDate;

use crate::model::user::UserDto;

/// User account with credential material.
///
/// Unlike `UserDto`, this model carries `psw` (the stored digest), `salt`,
/// and the active `session_token`. Controllers need these for login and
/// password-change verification; they are stripped before anything is
/// serialized into a response.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Numeric id of the user.
    pub user_id: i32,
    /// Given name.
    pub forename: String,
    /// Family name.
    pub lastname: String,
    /// Single-character sex marker (`M`, `F`, or `O`).
    pub sex: String,
    /// Date of birth; always in the past.
    pub birthdate: NaiveDate,
    /// Unique email address.
    pub email: String,
    /// Keyed-hash digest of the password.
    pub psw: String,
    /// Per-user random salt.
    pub salt: String,
    /// Active session token, or `None` when logged out.
    pub session_token: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            forename: entity.forename,
            lastname: entity.lastname,
            sex: entity.sex,
            birthdate: entity.birthdate,
            email: entity.email,
            psw: entity.psw,
            salt: entity.salt,
            session_token: entity.session_token,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// Drops `psw`, `salt`, and `session_token`; those never appear in a
    /// response body.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO without credential fields
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            forename: self.forename,
            lastname: self.lastname,
            sex: self.sex,
            birthdate: self.birthdate,
            email: self.email,
        }
    }
}

/// Parameters for creating a user at registration.
///
/// `psw` carries the already-computed digest, not the plaintext; controllers
/// digest the password before constructing this type.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    /// Given name.
    pub forename: String,
    /// Family name.
    pub lastname: String,
    /// Single-character sex marker.
    pub sex: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
    /// Unique email address.
    pub email: String,
    /// Keyed-hash digest of the password.
    pub psw: String,
    /// Salt the digest was computed with.
    pub salt: String,
}

/// Parameters for a partial profile update.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    /// New given name, if changing.
    pub forename: Option<String>,
    /// New family name, if changing.
    pub lastname: Option<String>,
    /// New sex marker, if changing.
    pub sex: Option<String>,
    /// New date of birth, if changing.
    pub birthdate: Option<NaiveDate>,
}
