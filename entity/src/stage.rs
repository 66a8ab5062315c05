use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub championship_id: i32,
    pub number: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub location: String,
    pub map_link: Option<String>,
    pub starts_at: DateTimeUtc,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::championship::Entity",
        from = "Column::ChampionshipId",
        to = "super::championship::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Championship,
    #[sea_orm(has_many = "super::judge::Entity")]
    Judge,
    #[sea_orm(has_many = "super::pilot::Entity")]
    Pilot,
}

impl Related<super::championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Championship.def()
    }
}

impl Related<super::judge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Judge.def()
    }
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
