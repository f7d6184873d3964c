use sea_orm::entity::prelude::*;

/// Job listing posted by a company. `posted_date` is assigned by the
/// server at creation time, never supplied by the client.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub listing_id: i32,
    pub employer_id: i32,
    pub job_title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub posted_date: DateTimeUtc,
    pub annual_salary: i32,
    pub remote: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::EmployerId",
        to = "super::company::Column::CompanyId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
