//! User service for business logic.
//!
//! This module provides the `UserService` for user queries and role management.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, Role, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by chat id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error during query
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_id(id).await
    }

    /// Retrieves all users with pagination.
    ///
    /// # Arguments
    /// - `param` - Parameters specifying page number and users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = if param.per_page == 0 {
            0
        } else {
            total.div_ceil(param.per_page)
        };

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Changes the role of an existing user.
    ///
    /// # Returns
    /// - `Ok(())` - Role updated
    /// - `Err(AppError::NotFound)` - User with specified id does not exist
    /// - `Err(AppError::Persistence)` - Database error during update
    pub async fn set_role(&self, id: i64, role: Role) -> Result<(), AppError> {
        let updated = UserRepository::new(self.db).set_role(id, role).await?;
        if !updated {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("User {} is now {}", id, role);

        Ok(())
    }

    /// Retrieves all users holding a role.
    pub async fn get_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_by_role(role).await
    }
}
