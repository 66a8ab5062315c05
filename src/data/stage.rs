//! Stage data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::stage::{CreateStageParam, Stage};

/// Repository providing database operations for stages.
pub struct StageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new stage with registration open.
    ///
    /// # Returns
    /// - `Ok(Stage)` - The created stage
    /// - `Err(DbErr)` - Database error, e.g. the championship does not exist
    pub async fn create(&self, param: CreateStageParam) -> Result<Stage, DbErr> {
        let now = Utc::now();
        let entity = entity::stage::ActiveModel {
            championship_id: ActiveValue::Set(param.championship_id),
            number: ActiveValue::Set(param.number),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            location: ActiveValue::Set(param.location),
            map_link: ActiveValue::Set(param.map_link),
            starts_at: ActiveValue::Set(param.starts_at),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Stage::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Stage>, DbErr> {
        let entity = entity::prelude::Stage::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Stage::from_entity))
    }

    /// Deletes a stage by id. Judges and pilots are removed by the database cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Stage::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the stages of a championship ordered by stage number.
    pub async fn get_by_championship(&self, championship_id: i32) -> Result<Vec<Stage>, DbErr> {
        let entities = entity::prelude::Stage::find()
            .filter(entity::stage::Column::ChampionshipId.eq(championship_id))
            .order_by_asc(entity::stage::Column::Number)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Stage::from_entity).collect())
    }

    /// Gets the ids of all stages of a championship.
    pub async fn get_ids_by_championship(&self, championship_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Stage::find()
            .select_only()
            .column(entity::stage::Column::Id)
            .filter(entity::stage::Column::ChampionshipId.eq(championship_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the earliest stage starting at or after `from`.
    ///
    /// # Arguments
    /// - `from` - Lower bound for `starts_at`, inclusive
    ///
    /// # Returns
    /// - `Ok(Some(Stage))` - Nearest upcoming stage
    /// - `Ok(None)` - No stage starts at or after `from`
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_nearest(&self, from: DateTime<Utc>) -> Result<Option<Stage>, DbErr> {
        let entity = entity::prelude::Stage::find()
            .filter(entity::stage::Column::StartsAt.gte(from))
            .order_by_asc(entity::stage::Column::StartsAt)
            .order_by_asc(entity::stage::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Stage::from_entity))
    }

    /// Opens or closes registration for a stage.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag updated
    /// - `Ok(false)` - No stage with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Stage::update_many()
            .col_expr(
                entity::stage::Column::IsActive,
                sea_orm::sea_query::Expr::value(is_active),
            )
            .col_expr(
                entity::stage::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::stage::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
