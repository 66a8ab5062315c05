//! Championship domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::file::FileRef;

/// A multi-stage competition created by an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct Championship {
    pub id: i32,
    /// Id of the user who created the championship.
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Number of stages announced for the season.
    pub stages_count: i32,
    /// Attachments such as posters and regulations, in attachment order.
    pub files: Vec<FileRef>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Championship {
    /// Converts an entity model at the repository boundary.
    ///
    /// Files are attached separately since they live in `file_refs`.
    pub fn from_entity(entity: entity::championship::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            stages_count: entity.stages_count,
            files: Vec::new(),
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a championship.
#[derive(Debug, Clone)]
pub struct CreateChampionshipParam {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub stages_count: i32,
}

/// Parameters for retrieving paginated championships.
#[derive(Debug, Clone)]
pub struct GetChampionshipsParam {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of championships with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedChampionships {
    pub championships: Vec<Championship>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
