//! Stage queries and registration window management.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        entity_store::{attach_files, find_with_files},
        stage::StageRepository,
    },
    error::AppError,
    model::stage::Stage,
};

pub struct StageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the stages of a championship ordered by stage number.
    pub async fn get_by_championship(&self, championship_id: i32) -> Result<Vec<Stage>, AppError> {
        let stages = StageRepository::new(self.db)
            .get_by_championship(championship_id)
            .await?;

        attach_files(self.db, stages).await
    }

    /// Retrieves the earliest stage starting at or after `from`.
    ///
    /// # Arguments
    /// - `from` - Lower bound for the start time, inclusive
    ///
    /// # Returns
    /// - `Ok(Some(Stage))` - Nearest stage with file metadata
    /// - `Ok(None)` - No upcoming stage
    /// - `Err(AppError)` - Database error during query
    pub async fn get_nearest(&self, from: DateTime<Utc>) -> Result<Option<Stage>, AppError> {
        let Some(stage) = StageRepository::new(self.db).get_nearest(from).await? else {
            return Ok(None);
        };

        find_with_files::<Stage, _>(self.db, stage.id).await
    }

    /// Opens or closes pilot registration by flipping the activity flag.
    ///
    /// # Returns
    /// - `Ok(bool)` - The new value of the flag
    /// - `Err(AppError::NotFound)` - Stage does not exist
    /// - `Err(AppError::Persistence)` - Database error
    pub async fn toggle_activity(&self, id: i32) -> Result<bool, AppError> {
        let repo = StageRepository::new(self.db);
        let stage = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Stage {} not found", id)))?;

        let is_active = !stage.is_active;
        repo.set_active(id, is_active).await?;

        tracing::info!("Stage {} registration open: {}", id, is_active);

        Ok(is_active)
    }
}
