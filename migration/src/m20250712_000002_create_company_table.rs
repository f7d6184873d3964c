use sea_orm_migration::{prelude::*, schema::*};

use super::m20250712_000001_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::CompanyId))
                    .col(string_len_uniq(Company::CompanyName, 50))
                    .col(integer(Company::CompanyOwner))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_company_owner")
                            .from(Company::Table, Company::CompanyOwner)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    CompanyId,
    CompanyName,
    CompanyOwner,
}
