//! Object store contract and adapters.
//!
//! File bytes live in an S3-compatible object store while their metadata lives in the
//! relational store. The `ObjectStore` trait is the seam between the two: services depend
//! on `Arc<dyn ObjectStore>` and never on a concrete client.
//!
//! - `s3` - Production adapter over `aws-sdk-s3`, path-style addressing for MinIO
//! - `memory` - In-process adapter with fault injection, built for tests and the
//!   `test-support` feature
//! - `bucket` - Bucket naming per entity kind
//! - `file_kind` - Pure extension-to-kind inference

pub mod bucket;
pub mod file_kind;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod s3;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::storage::StorageError;

/// Byte storage addressed by bucket and key.
///
/// Implementations must be safe to share across tasks.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `data` under `key` in `bucket`, replacing any existing object.
    ///
    /// # Arguments
    /// - `data` - Object bytes
    /// - `key` - Object key inside the bucket
    /// - `bucket` - Target bucket, must exist
    /// - `metadata` - Optional user metadata stored alongside the object
    ///
    /// # Returns
    /// - `Ok(())` - Object stored
    /// - `Err(StorageError::Upload)` - Store rejected or could not be reached
    async fn upload(
        &self,
        data: Vec<u8>,
        key: &str,
        bucket: &str,
        metadata: Option<HashMap<String, String>>,
    ) -> Result<(), StorageError>;

    /// Fetches the bytes stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Object bytes
    /// - `Err(StorageError::Download)` - Object missing or store unreachable
    async fn download(&self, key: &str, bucket: &str) -> Result<Vec<u8>, StorageError>;

    /// Removes the object stored under `key`.
    ///
    /// Removing a missing object succeeds.
    async fn remove(&self, key: &str, bucket: &str) -> Result<(), StorageError>;

    /// Creates `bucket` if it does not exist yet.
    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError>;
}
