use sea_orm::entity::prelude::*;

/// Account record. `psw` holds the keyed-hash digest of the password,
/// never the plaintext; `session_token` is the currently active login
/// token, or NULL when the user is logged out.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub forename: String,
    pub lastname: String,
    pub sex: String,
    pub birthdate: Date,
    #[sea_orm(unique)]
    pub email: String,
    pub psw: String,
    pub salt: String,
    pub session_token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company::Entity")]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
