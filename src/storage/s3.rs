//! S3-compatible object store adapter.
//!
//! Works against AWS S3 and MinIO. Path-style addressing is forced since MinIO
//! deployments are usually reached by a single host name.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    error::DisplayErrorContext,
    primitives::ByteStream,
    Client,
};

use crate::{config::Config, error::storage::StorageError, storage::ObjectStore};

/// Object store backed by an `aws-sdk-s3` client.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Builds a client from the S3 settings of the application configuration.
    ///
    /// # Arguments
    /// - `config` - Application configuration with endpoint, region and credentials
    ///
    /// # Returns
    /// - `S3ObjectStore` - Adapter ready for use; no request is made until first use
    pub async fn new(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(&config.s3_url)
            .region(Region::new(config.s3_region.clone()))
            .credentials_provider(Credentials::new(
                &config.s3_access_key,
                &config.s3_secret_key,
                None,
                None,
                "drift-registry",
            ))
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn upload(
        &self,
        data: Vec<u8>,
        key: &str,
        bucket: &str,
        metadata: Option<HashMap<String, String>>,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .set_metadata(metadata)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn download(&self, key: &str, bucket: &str) -> Result<Vec<u8>, StorageError> {
        let download_error = |message: String| StorageError::Download {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        };

        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| download_error(DisplayErrorContext(&e).to_string()))?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| download_error(e.to_string()))?;

        Ok(data.into_bytes().to_vec())
    }

    async fn remove(&self, key: &str, bucket: &str) -> Result<(), StorageError> {
        // S3 reports success for keys that do not exist.
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Remove {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        match self.client.create_bucket().bucket(bucket).send().await {
            Ok(_) => {
                tracing::info!("Created bucket {}", bucket);
                Ok(())
            }
            Err(e) => {
                let already_exists = e.as_service_error().is_some_and(|service_err| {
                    service_err.is_bucket_already_owned_by_you()
                        || service_err.is_bucket_already_exists()
                });

                if already_exists {
                    Ok(())
                } else {
                    Err(StorageError::Bucket {
                        bucket: bucket.to_string(),
                        message: DisplayErrorContext(&e).to_string(),
                    })
                }
            }
        }
    }
}
