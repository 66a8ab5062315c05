//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Users are keyed by
//! their chat platform id and created on first interaction.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::user::{CreateUserParam, Role, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user unless one with the same id already exists.
    ///
    /// An existing user is left untouched, including its role, so calling this again for a
    /// known user is a no-op. The stored user is returned in both cases.
    ///
    /// # Arguments
    /// - `param` - Id, username and role for a new user
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user, either pre-existing or just created
    /// - `Err(AppError::Persistence)` - Database error during insert or query
    pub async fn get_or_create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let id = param.id;

        entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(param.id),
            username: ActiveValue::Set(param.username),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("User {} missing after insert", id)))
    }

    /// Finds a user by chat id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unreadable stored role
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets all users with pagination, ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(AppError::Persistence)` - Database error during update
    pub async fn set_role(&self, id: i64, role: Role) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all users holding a role, ordered by id.
    pub async fn get_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }
}
