use sea_orm_migration::{prelude::*, schema::*};

use super::m20250712_000002_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::ListingId))
                    .col(integer(Listing::EmployerId))
                    .col(string_len(Listing::JobTitle, 100))
                    .col(text(Listing::Description))
                    .col(
                        timestamp(Listing::PostedDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Listing::AnnualSalary))
                    .col(boolean(Listing::Remote))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_employer_id")
                            .from(Listing::Table, Listing::EmployerId)
                            .to(Company::Table, Company::CompanyId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    ListingId,
    EmployerId,
    JobTitle,
    Description,
    PostedDate,
    AnnualSalary,
    Remote,
}
