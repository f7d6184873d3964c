//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration, credential lookups, session-token management, profile and
//! password updates, and deletion, with conversion between entity models and domain
//! models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::user::{RegisterUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user from registration parameters.
    ///
    /// The password digest and salt must already be computed; this method
    /// stores them verbatim. The new user starts without a session token.
    ///
    /// # Arguments
    /// - `param` - Registration parameters including digest and salt
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique-email violations)
    pub async fn create(&self, param: RegisterUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            forename: ActiveValue::Set(param.forename),
            lastname: ActiveValue::Set(param.lastname),
            sex: ActiveValue::Set(param.sex),
            birthdate: ActiveValue::Set(param.birthdate),
            email: ActiveValue::Set(param.email),
            psw: ActiveValue::Set(param.psw),
            salt: ActiveValue::Set(param.salt),
            session_token: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their numeric id.
    ///
    /// # Arguments
    /// - `user_id` - Numeric id of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their email address.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user currently holding a session token.
    ///
    /// A token matches at most one user because each login overwrites the
    /// user's previous token.
    ///
    /// # Arguments
    /// - `token` - Session token from the request cookie
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user holds this token
    /// - `Ok(None)` - No user holds this token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_session_token(&self, token: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::SessionToken.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Attaches a session token to a user, overwriting any prior value.
    ///
    /// Overwriting invalidates the user's previous session; only the most
    /// recent login remains usable.
    ///
    /// # Arguments
    /// - `user_id` - Numeric id of the user
    /// - `token` - Freshly issued session token
    ///
    /// # Returns
    /// - `Ok(())` - Token stored (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn attach_session_token(&self, user_id: i32, token: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::UserId.eq(user_id))
            .col_expr(
                entity::user::Column::SessionToken,
                sea_orm::sea_query::Expr::value(token),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces a user's password digest and logs them out.
    ///
    /// Clears the session token in the same statement so that the old cookie
    /// stops authenticating as soon as the password changes.
    ///
    /// # Arguments
    /// - `user_id` - Numeric id of the user
    /// - `psw` - New password digest
    ///
    /// # Returns
    /// - `Ok(())` - Digest updated and token cleared (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, user_id: i32, psw: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::UserId.eq(user_id))
            .col_expr(
                entity::user::Column::Psw,
                sea_orm::sea_query::Expr::value(psw),
            )
            .col_expr(
                entity::user::Column::SessionToken,
                sea_orm::sea_query::Expr::value(None::<String>),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Applies a partial profile update to a user.
    ///
    /// Fields left as `None` in the parameters keep their stored values. When
    /// every field is `None` the stored row is returned unchanged.
    ///
    /// # Arguments
    /// - `user_id` - Numeric id of the user
    /// - `param` - Optional replacement values per profile field
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.forename.is_none()
            && param.lastname.is_none()
            && param.sex.is_none()
            && param.birthdate.is_none()
        {
            return Ok(Some(User::from_entity(user)));
        }

        let mut active = user.into_active_model();

        if let Some(forename) = param.forename {
            active.forename = ActiveValue::Set(forename);
        }
        if let Some(lastname) = param.lastname {
            active.lastname = ActiveValue::Set(lastname);
        }
        if let Some(sex) = param.sex {
            active.sex = ActiveValue::Set(sex);
        }
        if let Some(birthdate) = param.birthdate {
            active.birthdate = ActiveValue::Set(birthdate);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user by id.
    ///
    /// Companies owned by the user, and their listings, are removed by the
    /// cascade on `company.company_owner`.
    ///
    /// # Arguments
    /// - `user_id` - Numeric id of the user
    ///
    /// # Returns
    /// - `Ok(())` - User deleted (or no matching user found)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
