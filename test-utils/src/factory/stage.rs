//! Stage factory for creating test stage rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let stage = StageFactory::new(&db, championship.id)
///     .starts_at(Utc::now() + Duration::days(7))
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct StageFactory<'a> {
    db: &'a DatabaseConnection,
    championship_id: i32,
    number: i32,
    title: String,
    starts_at: DateTime<Utc>,
    is_active: bool,
}

impl<'a> StageFactory<'a> {
    /// Creates a new StageFactory with default values.
    ///
    /// Defaults:
    /// - number: `1`
    /// - title: `"Stage {id}"`
    /// - starts_at: one week from now
    /// - is_active: `true` (registration open)
    pub fn new(db: &'a DatabaseConnection, championship_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            championship_id,
            number: 1,
            title: format!("Stage {}", id),
            starts_at: Utc::now() + Duration::days(7),
            is_active: true,
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the stage row into the database.
    pub async fn build(self) -> Result<entity::stage::Model, DbErr> {
        let now = Utc::now();
        entity::stage::ActiveModel {
            championship_id: ActiveValue::Set(self.championship_id),
            number: ActiveValue::Set(self.number),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            location: ActiveValue::Set("Test Track".to_string()),
            map_link: ActiveValue::Set(None),
            starts_at: ActiveValue::Set(self.starts_at),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open stage with default values.
pub async fn create_stage(
    db: &DatabaseConnection,
    championship_id: i32,
) -> Result<entity::stage::Model, DbErr> {
    StageFactory::new(db, championship_id).build().await
}
