//! Entity service keeping entity rows and stored files consistent.
//!
//! Files are uploaded before any row is written and rows are deleted before any blob is
//! removed. Either way a failure can only leave blobs without metadata (orphans), never
//! metadata pointing at missing blobs. Orphans are logged at warn level with bucket and
//! key so they can be cleaned up out of band.

use std::{collections::HashMap, marker::PhantomData};

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    data::{
        entity_store::{find_with_files, EntityStore},
        file_ref::FileRefRepository,
    },
    error::AppError,
    model::file::{Blob, FileRef, UploadedFile},
    storage::{bucket::Buckets, file_kind, ObjectStore},
};

/// Service creating, reading and deleting entities of kind `K` with their files.
pub struct EntityService<'a, K: EntityStore> {
    db: &'a DatabaseConnection,
    store: &'a dyn ObjectStore,
    buckets: &'a Buckets,
    kind: PhantomData<K>,
}

impl<'a, K: EntityStore> EntityService<'a, K> {
    /// Creates a new EntityService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `store` - Object store holding file bytes
    /// - `buckets` - Bucket naming for the deployment
    ///
    /// # Returns
    /// - `EntityService` - New service instance
    pub fn new(db: &'a DatabaseConnection, store: &'a dyn ObjectStore, buckets: &'a Buckets) -> Self {
        Self {
            db,
            store,
            buckets,
            kind: PhantomData,
        }
    }

    /// Creates an entity with attached files.
    ///
    /// Every file is validated before the first upload. All files are then uploaded, and
    /// only after every upload succeeded are the entity row and its file references
    /// inserted in a single transaction.
    ///
    /// # Arguments
    /// - `param` - Fields of the entity row
    /// - `files` - Attachments in order; may be empty
    ///
    /// # Returns
    /// - `Ok(K)` - Persisted entity with file references in attachment order
    /// - `Err(AppError::Validation)` - A file has no or an unsupported extension; nothing
    ///   was uploaded or written
    /// - `Err(AppError::Storage(Upload))` - An upload failed; no row was written, files
    ///   uploaded earlier in this call are orphaned
    /// - `Err(AppError::Persistence)` - The transaction failed and was rolled back; all
    ///   uploaded files are orphaned
    pub async fn create(&self, param: K::Param, files: Vec<Blob>) -> Result<K, AppError> {
        let bucket = self.buckets.for_kind(K::KIND);

        let mut prepared = Vec::with_capacity(files.len());
        for blob in files {
            let (kind, format) = file_kind::infer(&blob.name)?;
            prepared.push((blob, kind, format));
        }

        let mut uploaded: Vec<UploadedFile> = Vec::with_capacity(prepared.len());
        for (position, (blob, kind, format)) in prepared.into_iter().enumerate() {
            let key = format!("{}.{}", Uuid::new_v4(), format);
            let size = blob.data.len() as i64;
            let metadata = HashMap::from([
                ("kind".to_string(), kind.as_str().to_string()),
                ("owner".to_string(), K::KIND.as_str().to_string()),
            ]);

            if let Err(err) = self
                .store
                .upload(blob.data, &key, &bucket, Some(metadata))
                .await
            {
                log_orphans(&uploaded, "upload of a sibling file failed");
                return Err(err.into());
            }

            uploaded.push(UploadedFile {
                key,
                bucket: bucket.clone(),
                name: blob.name,
                size,
                format,
                kind,
                position: position as i32,
            });
        }

        match self.persist(param, uploaded.clone()).await {
            Ok(entity) => {
                tracing::info!(
                    "Created {} {} with {} file(s)",
                    K::KIND,
                    entity.id(),
                    entity.files().len()
                );
                Ok(entity)
            }
            Err(err) => {
                log_orphans(&uploaded, "entity could not be persisted");
                Err(err)
            }
        }
    }

    /// Inserts the entity row and its file references in one transaction.
    async fn persist(&self, param: K::Param, uploaded: Vec<UploadedFile>) -> Result<K, AppError> {
        let txn = self.db.begin().await?;

        let inserted = async {
            let mut entity = K::insert(&txn, param).await?;
            let files = FileRefRepository::new(&txn)
                .create_many(K::KIND, entity.id(), uploaded)
                .await?;
            entity.set_files(files);
            Ok::<K, AppError>(entity)
        }
        .await;

        match inserted {
            Ok(entity) => {
                txn.commit().await?;
                Ok(entity)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    /// Reads an entity and downloads every attached file.
    ///
    /// Hydration is all-or-nothing: if any file cannot be downloaded the whole call fails.
    ///
    /// # Arguments
    /// - `id` - Entity id
    ///
    /// # Returns
    /// - `Ok(Some((K, Vec<Blob>)))` - Entity and file contents in attachment order
    /// - `Ok(None)` - No entity with that id
    /// - `Err(AppError::Storage(Download))` - A file is missing or the store is unreachable
    /// - `Err(AppError::Persistence)` - Database error while loading the entity
    pub async fn read(&self, id: i32) -> Result<Option<(K, Vec<Blob>)>, AppError> {
        let Some(entity) = find_with_files::<K, _>(self.db, id).await? else {
            return Ok(None);
        };

        let mut blobs = Vec::with_capacity(entity.files().len());
        for file in entity.files() {
            let data = self.store.download(&file.key, &file.bucket).await?;
            blobs.push(Blob {
                name: file.name.clone(),
                data,
            });
        }

        Ok(Some((entity, blobs)))
    }

    /// Gets an entity with file metadata only, without downloading anything.
    ///
    /// # Returns
    /// - `Ok(Some(K))` - Entity with file references
    /// - `Ok(None)` - No entity with that id
    /// - `Err(AppError::Persistence)` - Database error during query
    pub async fn get(&self, id: i32) -> Result<Option<K>, AppError> {
        find_with_files::<K, _>(self.db, id).await
    }

    /// Deletes an entity, its file references and its stored files.
    ///
    /// The entity row and the file references of the entity and of every row the database
    /// cascade removes with it are deleted in one transaction. Stored files are removed
    /// after commit on a best-effort basis: failures are logged and do not fail the call.
    ///
    /// # Arguments
    /// - `id` - Entity id
    ///
    /// # Returns
    /// - `Ok(true)` - Entity existed and was deleted
    /// - `Ok(false)` - No entity with that id
    /// - `Err(AppError::Persistence)` - The transaction failed; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        if K::find(&txn, id).await?.is_none() {
            txn.rollback().await?;
            return Ok(false);
        }

        let mut owners = vec![(K::KIND, id)];
        owners.extend(K::dependents(&txn, id).await?);

        let file_repo = FileRefRepository::new(&txn);
        let mut files: Vec<FileRef> = Vec::new();
        for (kind, owner_id) in owners {
            files.extend(file_repo.get_by_parent(kind, owner_id).await?);
            file_repo.delete_by_parent(kind, owner_id).await?;
        }

        K::remove(&txn, id).await?;
        txn.commit().await?;

        tracing::info!("Deleted {} {} with {} file(s)", K::KIND, id, files.len());

        for file in files {
            if let Err(err) = self.store.remove(&file.key, &file.bucket).await {
                tracing::warn!("Orphaned blob left after delete: {}", err);
            }
        }

        Ok(true)
    }
}

fn log_orphans(uploaded: &[UploadedFile], reason: &str) {
    for file in uploaded {
        tracing::warn!(
            "Orphaned blob {}/{} ({}): {}",
            file.bucket,
            file.key,
            file.name,
            reason
        );
    }
}
