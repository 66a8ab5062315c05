//! Championship data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::championship::{Championship, CreateChampionshipParam};

/// Repository providing database operations for championships.
///
/// Returned championships carry no files; `entity_store` attaches them.
pub struct ChampionshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChampionshipRepository<'a, C> {
    /// Creates a new ChampionshipRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ChampionshipRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active championship.
    ///
    /// # Arguments
    /// - `param` - Championship fields
    ///
    /// # Returns
    /// - `Ok(Championship)` - The created championship
    /// - `Err(DbErr)` - Database error, e.g. the creating user does not exist
    pub async fn create(&self, param: CreateChampionshipParam) -> Result<Championship, DbErr> {
        let now = Utc::now();
        let entity = entity::championship::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            stages_count: ActiveValue::Set(param.stages_count),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Championship::from_entity(entity))
    }

    /// Finds a championship by id.
    ///
    /// # Returns
    /// - `Ok(Some(Championship))` - Championship found
    /// - `Ok(None)` - No championship with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Championship>, DbErr> {
        let entity = entity::prelude::Championship::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Championship::from_entity))
    }

    /// Deletes a championship by id.
    ///
    /// Stages, judges and pilots are removed by the database cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Championship::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets championships with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of championships per page
    ///
    /// # Returns
    /// - `Ok((championships, total))` - Championships of the page and total item count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Championship>, u64), DbErr> {
        let paginator = entity::prelude::Championship::find()
            .order_by_desc(entity::championship::Column::CreatedAt)
            .order_by_desc(entity::championship::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let championships = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Championship::from_entity)
            .collect();

        Ok((championships, total))
    }

    /// Gets all active championships, newest first.
    pub async fn get_active(&self) -> Result<Vec<Championship>, DbErr> {
        let entities = entity::prelude::Championship::find()
            .filter(entity::championship::Column::IsActive.eq(true))
            .order_by_desc(entity::championship::Column::CreatedAt)
            .order_by_desc(entity::championship::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Championship::from_entity).collect())
    }

    /// Gets all championships created by a user, newest first.
    pub async fn get_by_user(&self, user_id: i64) -> Result<Vec<Championship>, DbErr> {
        let entities = entity::prelude::Championship::find()
            .filter(entity::championship::Column::UserId.eq(user_id))
            .order_by_desc(entity::championship::Column::CreatedAt)
            .order_by_desc(entity::championship::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Championship::from_entity).collect())
    }

    /// Sets the activity flag of a championship.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag updated
    /// - `Ok(false)` - No championship with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Championship::update_many()
            .col_expr(
                entity::championship::Column::IsActive,
                sea_orm::sea_query::Expr::value(is_active),
            )
            .col_expr(
                entity::championship::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::championship::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
