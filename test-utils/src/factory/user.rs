//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("jane@example.com")
///     .session_token(Some("token".to_string()))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    forename: String,
    lastname: String,
    sex: String,
    birthdate: NaiveDate,
    email: String,
    psw: String,
    salt: String,
    session_token: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - forename: `"User {id}"` where id is auto-incremented
    /// - lastname: `"Example"`
    /// - sex: `"O"`
    /// - birthdate: `1990-01-01`
    /// - email: `"user{id}@example.com"`
    /// - psw: `"digest"` (an opaque placeholder, not a real digest)
    /// - salt: `"salt"`
    /// - session_token: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            forename: format!("User {}", id),
            lastname: "Example".to_string(),
            sex: "O".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email: format!("user{}@example.com", id),
            psw: "digest".to_string(),
            salt: "salt".to_string(),
            session_token: None,
        }
    }

    /// Sets the forename for the user.
    ///
    /// # Arguments
    /// - `forename` - Given name for the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn forename(mut self, forename: impl Into<String>) -> Self {
        self.forename = forename.into();
        self
    }

    /// Sets the lastname for the user.
    ///
    /// # Arguments
    /// - `lastname` - Family name for the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = lastname.into();
        self
    }

    /// Sets the sex for the user.
    ///
    /// # Arguments
    /// - `sex` - Single-character sex marker (`M`, `F`, or `O`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = sex.into();
        self
    }

    /// Sets the birthdate for the user.
    ///
    /// # Arguments
    /// - `birthdate` - Date of birth
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = birthdate;
        self
    }

    /// Sets the email for the user.
    ///
    /// # Arguments
    /// - `email` - Unique email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password digest for the user.
    ///
    /// # Arguments
    /// - `psw` - Password digest value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn psw(mut self, psw: impl Into<String>) -> Self {
        self.psw = psw.into();
        self
    }

    /// Sets the salt for the user.
    ///
    /// # Arguments
    /// - `salt` - Per-user random salt value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Sets the session token for the user.
    ///
    /// # Arguments
    /// - `session_token` - Active session token, or `None` for logged out
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn session_token(mut self, session_token: Option<String>) -> Self {
        self.session_token = session_token;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            forename: ActiveValue::Set(self.forename),
            lastname: ActiveValue::Set(self.lastname),
            sex: ActiveValue::Set(self.sex),
            birthdate: ActiveValue::Set(self.birthdate),
            email: ActiveValue::Set(self.email),
            psw: ActiveValue::Set(self.psw),
            salt: ActiveValue::Set(self.salt),
            session_token: ActiveValue::Set(self.session_token),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
