use thiserror::Error;

/// Object store failures.
///
/// Every variant names the bucket and key involved so that orphaned or missing
/// blobs can be traced from the logs.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to upload '{key}' to bucket '{bucket}': {message}")]
    Upload {
        bucket: String,
        key: String,
        message: String,
    },

    /// Blob is missing or the store is unreachable.
    #[error("Failed to download '{key}' from bucket '{bucket}': {message}")]
    Download {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to remove '{key}' from bucket '{bucket}': {message}")]
    Remove {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to provision bucket '{bucket}': {message}")]
    Bucket { bucket: String, message: String },
}
