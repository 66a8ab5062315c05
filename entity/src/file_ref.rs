use sea_orm::entity::prelude::*;

/// Metadata of a blob stored in the object store.
///
/// Polymorphic over its owner: `(parent_type, parent_id)` points at a row in one of
/// the entity tables, so there is no database-level foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "file_refs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub parent_type: String,
    #[sea_orm(indexed)]
    pub parent_id: i32,
    pub position: i32,
    #[sea_orm(unique)]
    pub key: String,
    pub bucket: String,
    pub name: String,
    pub size: i64,
    pub format: String,
    pub kind: String,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
