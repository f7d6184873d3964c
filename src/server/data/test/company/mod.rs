use crate::server::data::company::CompanyRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod delete;
mod find_by_name;
mod find_by_owner;
