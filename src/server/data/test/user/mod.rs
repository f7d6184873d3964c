use crate::server::{
    data::user::UserRepository,
    model::user::{RegisterUserParam, UpdateUserParam},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod attach_session_token;
mod create;
mod delete;
mod find_by_email;
mod find_by_session_token;
mod update_password;
mod update_profile;

/// Builds a valid registration parameter set for the given email.
fn registration_param(email: &str) -> RegisterUserParam {
    RegisterUserParam {
        forename: "Jane".to_string(),
        lastname: "Doe".to_string(),
        sex: "F".to_string(),
        birthdate: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        email: email.to_string(),
        psw: "digest".to_string(),
        salt: "salt".to_string(),
    }
}
