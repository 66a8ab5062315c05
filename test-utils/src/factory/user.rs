//! User factory for creating test user rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .id(123456789)
///     .username("pilot_one")
///     .role("PILOT")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    username: Option<String>,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented counter value
    /// - username: `"user_{id}"`
    /// - role: `"PILOT"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id as i64,
            username: Some(format!("user_{}", id)),
            role: "PILOT".to_string(),
        }
    }

    /// Sets the chat user id.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the username, `None` for users without a public handle.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the stored role string (`ADMIN`, `JUDGE`, `PILOT` or `DEVELOPER`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            username: ActiveValue::Set(self.username),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pilot user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
