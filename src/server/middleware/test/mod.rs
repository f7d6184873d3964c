use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::SessionGuard,
    service::cache::ResponseCache,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;
