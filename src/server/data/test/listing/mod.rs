use crate::server::{
    data::listing::ListingRepository,
    model::listing::{CreateListingParam, ListListingsParam, UpdateListingParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod delete;
mod get_all;
mod update;
