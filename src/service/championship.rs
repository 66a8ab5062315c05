//! Championship queries and activity management.
//!
//! Creation and deletion go through `EntityService<Championship>` since championships
//! own files.

use sea_orm::DatabaseConnection;

use crate::{
    data::{championship::ChampionshipRepository, entity_store::attach_files},
    error::AppError,
    model::championship::{Championship, GetChampionshipsParam, PaginatedChampionships},
};

pub struct ChampionshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChampionshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves championships with pagination, newest first.
    ///
    /// # Arguments
    /// - `param` - Parameters specifying page number and championships per page
    ///
    /// # Returns
    /// - `Ok(PaginatedChampionships)` - Championships of the page with file metadata
    /// - `Err(AppError)` - Database error during query
    pub async fn get_paginated(
        &self,
        param: GetChampionshipsParam,
    ) -> Result<PaginatedChampionships, AppError> {
        let (championships, total) = ChampionshipRepository::new(self.db)
            .get_paginated(param.page, param.per_page)
            .await?;
        let championships = attach_files(self.db, championships).await?;

        let total_pages = if param.per_page == 0 {
            0
        } else {
            total.div_ceil(param.per_page)
        };

        Ok(PaginatedChampionships {
            championships,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Retrieves championships open to participants.
    pub async fn get_active(&self) -> Result<Vec<Championship>, AppError> {
        let championships = ChampionshipRepository::new(self.db).get_active().await?;

        attach_files(self.db, championships).await
    }

    /// Retrieves championships created by a user.
    pub async fn get_by_user(&self, user_id: i64) -> Result<Vec<Championship>, AppError> {
        let championships = ChampionshipRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        attach_files(self.db, championships).await
    }

    /// Flips the activity flag of a championship.
    ///
    /// # Returns
    /// - `Ok(bool)` - The new value of the flag
    /// - `Err(AppError::NotFound)` - Championship does not exist
    /// - `Err(AppError::Persistence)` - Database error
    pub async fn toggle_activity(&self, id: i32) -> Result<bool, AppError> {
        let repo = ChampionshipRepository::new(self.db);
        let championship = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Championship {} not found", id)))?;

        let is_active = !championship.is_active;
        repo.set_active(id, is_active).await?;

        tracing::info!("Championship {} active: {}", id, is_active);

        Ok(is_active)
    }
}
