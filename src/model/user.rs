//! User domain models and parameters.
//!
//! Users are identified by their chat platform id and carry a single role that gates
//! which conversations they can enter.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, util::parse::parse_stored};

/// Role of a user within the competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Judge,
    Pilot,
    Developer,
}

impl Role {
    /// Value stored in the `role` columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Judge => "JUDGE",
            Self::Pilot => "PILOT",
            Self::Developer => "DEVELOPER",
        }
    }

    /// Prefix placed in front of invitation codes granting this role.
    pub fn code_prefix(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Judge => "judge",
            Self::Pilot => "pilot",
            Self::Developer => "developer",
        }
    }

    /// Maps an invitation code back to the role it grants.
    ///
    /// The prefix is everything before the first underscore.
    ///
    /// # Arguments
    /// - `code` - Full invitation code, e.g. `judge_Xy12...`
    ///
    /// # Returns
    /// - `Some(Role)` - Prefix names a known role
    /// - `None` - Code has no prefix or the prefix is unknown
    pub fn from_code_prefix(code: &str) -> Option<Self> {
        let (prefix, _) = code.split_once('_')?;
        [Self::Admin, Self::Judge, Self::Pilot, Self::Developer]
            .into_iter()
            .find(|role| role.code_prefix() == prefix)
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "JUDGE" => Ok(Self::Judge),
            "PILOT" => Ok(Self::Pilot),
            "DEVELOPER" => Ok(Self::Developer),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User with chat identity and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Chat platform id of the user.
    pub id: i64,
    /// Public handle, absent for users that never set one.
    pub username: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::Internal(UnknownEnumValue))` - Stored role is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            username: entity.username,
            role: parse_stored("users.role", entity.role)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a user on first interaction.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id: i64,
    pub username: Option<String>,
    pub role: Role,
}

/// Parameters for retrieving paginated users.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
