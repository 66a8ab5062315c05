//! Stage domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::file::FileRef;

/// One event of a championship. Pilots and judges register per stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub id: i32,
    pub championship_id: i32,
    /// Ordinal of the stage within its championship.
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub map_link: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub files: Vec<FileRef>,
    /// Whether registration is open.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stage {
    /// Converts an entity model at the repository boundary, without files.
    pub fn from_entity(entity: entity::stage::Model) -> Self {
        Self {
            id: entity.id,
            championship_id: entity.championship_id,
            number: entity.number,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            map_link: entity.map_link,
            starts_at: entity.starts_at,
            files: Vec::new(),
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a stage.
#[derive(Debug, Clone)]
pub struct CreateStageParam {
    pub championship_id: i32,
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub map_link: Option<String>,
    pub starts_at: DateTime<Utc>,
}
