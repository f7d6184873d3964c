pub use sea_orm_migration::prelude::*;

mod m20250712_000001_create_user_table;
mod m20250712_000002_create_company_table;
mod m20250713_000003_create_listing_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250712_000001_create_user_table::Migration),
            Box::new(m20250712_000002_create_company_table::Migration),
            Box::new(m20250713_000003_create_listing_table::Migration),
        ]
    }
}
