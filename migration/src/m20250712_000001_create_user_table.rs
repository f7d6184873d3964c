use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::UserId))
                    .col(string_len(Users::Forename, 100))
                    .col(string_len(Users::Lastname, 100))
                    .col(string_len(Users::Sex, 1))
                    .col(date(Users::Birthdate))
                    .col(string_len_uniq(Users::Email, 255))
                    .col(string(Users::Psw))
                    .col(string(Users::Salt))
                    .col(string_null(Users::SessionToken))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    UserId,
    Forename,
    Lastname,
    Sex,
    Birthdate,
    Email,
    Psw,
    Salt,
    SessionToken,
}
