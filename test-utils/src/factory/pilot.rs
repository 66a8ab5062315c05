//! Pilot factory for creating test pilot rows with explicit racing numbers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pilot row on a stage with the given racing number.
///
/// Used to occupy numbers before exercising allocation. No files are attached.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the registering user (must exist)
/// - `stage_id` - Id of the stage (must exist)
/// - `number` - Racing number to occupy
///
/// # Returns
/// - `Ok(entity::pilot::Model)` - Created pilot row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pilot(
    db: &DatabaseConnection,
    user_id: i64,
    stage_id: i32,
    number: i32,
) -> Result<entity::pilot::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::pilot::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        stage_id: ActiveValue::Set(stage_id),
        full_name: ActiveValue::Set(format!("Pilot {}", id)),
        age: ActiveValue::Set(25),
        description: ActiveValue::Set(String::new()),
        car: ActiveValue::Set("Nissan Silvia S15".to_string()),
        number: ActiveValue::Set(number),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
