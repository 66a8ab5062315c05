use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Chat platform user id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub username: Option<String>,
    pub role: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::championship::Entity")]
    Championship,
    #[sea_orm(has_many = "super::referral_code::Entity")]
    ReferralCode,
}

impl Related<super::championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl Related<super::referral_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReferralCode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
