//! File attachment models.
//!
//! A `Blob` is bytes in flight between the caller and the object store. A `FileRef` is
//! the persisted description of where those bytes ended up.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, util::parse::parse_stored};

/// Category of an attached file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Photo,
    Document,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Document => "document",
        }
    }
}

impl FromStr for FileKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "photo" => Ok(Self::Photo),
            "document" => Ok(Self::Document),
            _ => Err(()),
        }
    }
}

/// Raw file bytes with the original filename, not yet durably stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub name: String,
    pub data: Vec<u8>,
}

impl Blob {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Persisted metadata of a stored blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub id: i32,
    /// Object key inside `bucket`.
    pub key: String,
    pub bucket: String,
    /// Original filename as uploaded.
    pub name: String,
    /// Size in bytes.
    pub size: i64,
    /// Lower-cased extension.
    pub format: String,
    pub kind: FileKind,
    /// Zero-based attachment index.
    pub position: i32,
    pub uploaded_at: DateTime<Utc>,
}

impl FileRef {
    /// Converts an entity model to a file reference at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(FileRef)` - The converted domain model
    /// - `Err(AppError::Internal(UnknownEnumValue))` - Stored kind is not recognized
    pub fn from_entity(entity: entity::file_ref::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            key: entity.key,
            bucket: entity.bucket,
            name: entity.name,
            size: entity.size,
            format: entity.format,
            kind: parse_stored("file_refs.kind", entity.kind)?,
            position: entity.position,
            uploaded_at: entity.uploaded_at,
        })
    }
}

/// A blob that has been uploaded and is waiting for its metadata row.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub key: String,
    pub bucket: String,
    pub name: String,
    pub size: i64,
    pub format: String,
    pub kind: FileKind,
    pub position: i32,
}
