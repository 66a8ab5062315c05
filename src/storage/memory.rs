//! In-process object store.
//!
//! Keeps objects in a map guarded by a mutex. Buckets are created implicitly on first
//! upload. Faults can be switched on per operation to exercise partial-failure paths
//! of the services without a running S3.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
};

use async_trait::async_trait;

use crate::{error::storage::StorageError, storage::ObjectStore};

type ObjectMap = HashMap<(String, String), Vec<u8>>;

#[derive(Default)]
pub struct MemoryObjectStore {
    /// Objects keyed by `(bucket, key)`.
    objects: Mutex<ObjectMap>,
    buckets: Mutex<HashSet<String>>,
    /// Number of uploads that succeed before every further upload fails.
    uploads_before_failure: Mutex<Option<usize>>,
    uploads: AtomicUsize,
    fail_downloads: AtomicBool,
    fail_removes: AtomicBool,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every upload after the first `successful` ones fail.
    pub fn fail_uploads_after(&self, successful: usize) {
        *lock(&self.uploads_before_failure) = Some(successful);
        self.uploads.store(0, Ordering::SeqCst);
    }

    pub fn fail_downloads(&self, fail: bool) {
        self.fail_downloads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_removes(&self, fail: bool) {
        self.fail_removes.store(fail, Ordering::SeqCst);
    }

    /// Returns whether an object exists under `key` in `bucket`.
    pub fn contains(&self, key: &str, bucket: &str) -> bool {
        lock(&self.objects).contains_key(&(bucket.to_string(), key.to_string()))
    }

    /// Number of objects stored in `bucket`.
    pub fn object_count(&self, bucket: &str) -> usize {
        lock(&self.objects)
            .keys()
            .filter(|(object_bucket, _)| object_bucket == bucket)
            .count()
    }

    /// Drops an object without going through `remove`, simulating external deletion.
    pub fn evict(&self, key: &str, bucket: &str) {
        lock(&self.objects).remove(&(bucket.to_string(), key.to_string()));
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        lock(&self.buckets).contains(bucket)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(
        &self,
        data: Vec<u8>,
        key: &str,
        bucket: &str,
        _metadata: Option<HashMap<String, String>>,
    ) -> Result<(), StorageError> {
        let threshold = *lock(&self.uploads_before_failure);
        if let Some(successful) = threshold {
            if self.uploads.fetch_add(1, Ordering::SeqCst) >= successful {
                return Err(StorageError::Upload {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    message: "injected upload failure".to_string(),
                });
            }
        }

        lock(&self.buckets).insert(bucket.to_string());
        lock(&self.objects).insert((bucket.to_string(), key.to_string()), data);

        Ok(())
    }

    async fn download(&self, key: &str, bucket: &str) -> Result<Vec<u8>, StorageError> {
        let download_error = |message: &str| StorageError::Download {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.fail_downloads.load(Ordering::SeqCst) {
            return Err(download_error("injected download failure"));
        }

        lock(&self.objects)
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| download_error("no such key"))
    }

    async fn remove(&self, key: &str, bucket: &str) -> Result<(), StorageError> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(StorageError::Remove {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "injected remove failure".to_string(),
            });
        }

        lock(&self.objects).remove(&(bucket.to_string(), key.to_string()));

        Ok(())
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        lock(&self.buckets).insert(bucket.to_string());
        Ok(())
    }
}
