//! File reference repository.
//!
//! File references are polymorphic over their owner: `(parent_type, parent_id)` points at
//! a row of one of the entity tables. There is no foreign key, so owners must delete their
//! file references explicitly in the same transaction as the owning row.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::{
        file::{FileRef, UploadedFile},
        EntityKind,
    },
};

pub struct FileRefRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FileRefRepository<'a, C> {
    /// Creates a new FileRefRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts metadata rows for uploaded files of one owner.
    ///
    /// Rows are inserted in the order given, which is the attachment order.
    ///
    /// # Arguments
    /// - `kind` - Kind of the owning entity
    /// - `parent_id` - Id of the owning entity
    /// - `files` - Uploaded files with their positions
    ///
    /// # Returns
    /// - `Ok(Vec<FileRef>)` - Inserted rows in attachment order
    /// - `Err(AppError::Persistence)` - Database error during insert
    pub async fn create_many(
        &self,
        kind: EntityKind,
        parent_id: i32,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<FileRef>, AppError> {
        let uploaded_at = Utc::now();
        let mut file_refs = Vec::with_capacity(files.len());

        for file in files {
            let entity = entity::file_ref::ActiveModel {
                parent_type: ActiveValue::Set(kind.as_str().to_string()),
                parent_id: ActiveValue::Set(parent_id),
                position: ActiveValue::Set(file.position),
                key: ActiveValue::Set(file.key),
                bucket: ActiveValue::Set(file.bucket),
                name: ActiveValue::Set(file.name),
                size: ActiveValue::Set(file.size),
                format: ActiveValue::Set(file.format),
                kind: ActiveValue::Set(file.kind.as_str().to_string()),
                uploaded_at: ActiveValue::Set(uploaded_at),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            file_refs.push(FileRef::from_entity(entity)?);
        }

        Ok(file_refs)
    }

    /// Gets the files of one owner in attachment order.
    ///
    /// # Returns
    /// - `Ok(Vec<FileRef>)` - Files ordered by position (empty if none)
    /// - `Err(AppError::Persistence)` - Database error during query
    pub async fn get_by_parent(
        &self,
        kind: EntityKind,
        parent_id: i32,
    ) -> Result<Vec<FileRef>, AppError> {
        entity::prelude::FileRef::find()
            .filter(entity::file_ref::Column::ParentType.eq(kind.as_str()))
            .filter(entity::file_ref::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::file_ref::Column::Position)
            .all(self.db)
            .await?
            .into_iter()
            .map(FileRef::from_entity)
            .collect()
    }

    /// Gets the files of many owners of the same kind in one query.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Vec<FileRef>>)` - Files grouped by owner id, each group in
    ///   attachment order; owners without files are absent
    /// - `Err(AppError::Persistence)` - Database error during query
    pub async fn get_by_parents(
        &self,
        kind: EntityKind,
        parent_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<FileRef>>, AppError> {
        let mut grouped: HashMap<i32, Vec<FileRef>> = HashMap::new();
        if parent_ids.is_empty() {
            return Ok(grouped);
        }

        let entities = entity::prelude::FileRef::find()
            .filter(entity::file_ref::Column::ParentType.eq(kind.as_str()))
            .filter(entity::file_ref::Column::ParentId.is_in(parent_ids.iter().copied()))
            .order_by_asc(entity::file_ref::Column::ParentId)
            .order_by_asc(entity::file_ref::Column::Position)
            .all(self.db)
            .await?;

        for entity in entities {
            let parent_id = entity.parent_id;
            grouped
                .entry(parent_id)
                .or_default()
                .push(FileRef::from_entity(entity)?);
        }

        Ok(grouped)
    }

    /// Deletes every file reference of one owner.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::Persistence)` - Database error during delete
    pub async fn delete_by_parent(&self, kind: EntityKind, parent_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::FileRef::delete_many()
            .filter(entity::file_ref::Column::ParentType.eq(kind.as_str()))
            .filter(entity::file_ref::Column::ParentId.eq(parent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
