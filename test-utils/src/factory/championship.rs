//! Championship factory for creating test championship rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test championships with customizable fields.
pub struct ChampionshipFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    title: String,
    stages_count: i32,
    is_active: bool,
}

impl<'a> ChampionshipFactory<'a> {
    /// Creates a new ChampionshipFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Championship {id}"`
    /// - stages_count: `3`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `user_id` - Id of the organizing user (must exist)
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Championship {}", id),
            stages_count: 3,
            is_active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the championship row into the database.
    pub async fn build(self) -> Result<entity::championship::Model, DbErr> {
        let now = Utc::now();
        entity::championship::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            stages_count: ActiveValue::Set(self.stages_count),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active championship with default values.
pub async fn create_championship(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::championship::Model, DbErr> {
    ChampionshipFactory::new(db, user_id).build().await
}
