use crate::config::MinioConfig;
use async_trait::async_trait;
use minio::s3::args::{BucketExistsArgs, MakeBucketArgs, PutObjectArgs, RemoveObjectArgs};
use minio::s3::client::{Client, ClientBuilder};
use minio::s3::creds::StaticProvider;
use minio::s3::http::BaseUrl;
use std::io::Cursor;
use tracing::{debug, error, info, instrument, warn};

/// Where product images end up. Returns public URLs so documents only store links.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload_image(&self, filename: &str, content_type: &str, data: Vec<u8>) -> Result<String, MinioError>;
    async fn delete_image(&self, url: &str) -> Result<(), MinioError>;
}

#[derive(Debug, Clone)]
pub struct MinioService {
    client: Client,
    pub config: MinioConfig,
}

impl MinioService {
    /// Create a new MinIO service instance
    #[instrument(skip(config), fields(endpoint = %config.endpoint, bucket = %config.bucket_name))]
    pub async fn new(config: MinioConfig) -> Result<Self, MinioError> {
        info!("Initializing MinIO service");

        config.validate().map_err(|e| {
            error!("MinIO configuration validation failed: {}", e);
            MinioError::ConfigError(e.to_string())
        })?;

        let base_url = config.get_endpoint_url().parse::<BaseUrl>()
            .map_err(|e| {
                error!("Failed to parse MinIO endpoint URL: {}", e);
                MinioError::ConnectionError(format!("Invalid endpoint URL: {}", e))
            })?;

        let static_provider = StaticProvider::new(&config.access_key, &config.secret_key, None);

        let client = ClientBuilder::new(base_url)
            .provider(Some(Box::new(static_provider)))
            .build()
            .map_err(|e| {
                error!("Failed to create MinIO client: {}", e);
                MinioError::ConnectionError(format!("Client creation failed: {}", e))
            })?;

        let service = Self { client, config };
        service.ensure_bucket_exists().await?;

        info!("MinIO service initialized successfully");
        Ok(service)
    }

    /// Ensure the configured bucket exists, create if it doesn't
    #[instrument(skip(self))]
    async fn ensure_bucket_exists(&self) -> Result<(), MinioError> {
        let bucket_exists_args = BucketExistsArgs::new(&self.config.bucket_name)
            .map_err(|e| MinioError::InvalidArguments(e.to_string()))?;

        let exists = self.client.bucket_exists(&bucket_exists_args).await
            .map_err(|e| {
                error!("Failed to check if bucket exists: {}", e);
                MinioError::OperationError(format!("Bucket exists check failed: {}", e))
            })?;

        if exists {
            debug!("Bucket '{}' already exists", self.config.bucket_name);
            return Ok(());
        }

        warn!("Bucket '{}' does not exist, creating it", self.config.bucket_name);

        let make_bucket_args = MakeBucketArgs::new(&self.config.bucket_name)
            .map_err(|e| MinioError::InvalidArguments(e.to_string()))?;

        self.client.make_bucket(&make_bucket_args).await
            .map_err(|e| {
                error!("Failed to create bucket '{}': {}", self.config.bucket_name, e);
                MinioError::OperationError(format!("Bucket creation failed: {}", e))
            })?;

        info!("Successfully created bucket '{}'", self.config.bucket_name);
        Ok(())
    }

    /// Upload an object to MinIO
    #[instrument(skip(self, data), fields(object_name = %object_name, size = data.len()))]
    pub async fn put_object(
        &self,
        object_name: &str,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), MinioError> {
        info!("Uploading object '{}' to bucket '{}'", object_name, self.config.bucket_name);

        let bucket_name = self.config.bucket_name.clone();
        let object_name_owned = object_name.to_string();
        let client = self.client.clone();
        let content_type_owned = content_type.map(|ct| ct.to_string());

        // The SDK's put args borrow a `dyn Read`, which keeps the future off the async executor.
        tokio::task::spawn_blocking(move || {
            let mut reader = Cursor::new(data);
            let data_len = reader.get_ref().len();

            let mut args = PutObjectArgs::new(
                &bucket_name,
                &object_name_owned,
                &mut reader,
                Some(data_len),
                None,
            ).map_err(|e| MinioError::InvalidArguments(e.to_string()))?;

            if let Some(ref ct) = content_type_owned {
                args.content_type = ct;
            }

            futures::executor::block_on(client.put_object(&mut args))
                .map_err(|e| MinioError::OperationError(format!("Upload failed: {}", e)))?;
            Ok(())
        })
        .await
        .map_err(|e| {
            error!("Failed to join blocking task for put_object: {}", e);
            MinioError::OperationError(format!("Join error: {}", e))
        })??;

        info!("Successfully uploaded object '{}'", object_name);
        Ok(())
    }

    /// Delete an object from MinIO
    #[instrument(skip(self), fields(object_name = %object_name))]
    pub async fn remove_object(&self, object_name: &str) -> Result<(), MinioError> {
        info!("Deleting object '{}' from bucket '{}'", object_name, self.config.bucket_name);

        let bucket_name = self.config.bucket_name.clone();
        let object_name_owned = object_name.to_string();
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || {
            let args = RemoveObjectArgs::new(&bucket_name, &object_name_owned)
                .map_err(|e| MinioError::InvalidArguments(e.to_string()))?;
            futures::executor::block_on(client.remove_object(&args))
                .map_err(|e| MinioError::OperationError(format!("Delete failed: {}", e)))?;
            Ok(())
        })
        .await
        .map_err(|e| MinioError::OperationError(format!("Join error: {}", e)))?
    }

    /// Public link for an object: `<links_prefix>/<bucket>/<object>`
    pub fn generate_download_link(&self, object_name: &str) -> String {
        download_link(&self.config.links_prefix, &self.config.bucket_name, object_name)
    }

    /// Reverse of `generate_download_link`; `None` for URLs that are not ours.
    pub fn object_name_from_link(&self, url: &str) -> Option<String> {
        let prefix = format!(
            "{}/{}/",
            self.config.links_prefix.trim_end_matches('/'),
            self.config.bucket_name
        );
        url.strip_prefix(&prefix)
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
    }
}

#[async_trait]
impl ImageStore for MinioService {
    async fn upload_image(&self, filename: &str, content_type: &str, data: Vec<u8>) -> Result<String, MinioError> {
        if !content_type.starts_with("image/") {
            return Err(MinioError::InvalidArguments(format!(
                "Unsupported content type: {}",
                content_type
            )));
        }
        let object_name = image_object_name(&self.config.image_folder, filename);
        self.put_object(&object_name, data, Some(content_type)).await?;
        Ok(self.generate_download_link(&object_name))
    }

    async fn delete_image(&self, url: &str) -> Result<(), MinioError> {
        match self.object_name_from_link(url) {
            Some(object_name) => self.remove_object(&object_name).await,
            None => {
                warn!("Not removing externally hosted image: {}", url);
                Ok(())
            }
        }
    }
}

pub fn download_link(base_url: &str, bucket_name: &str, object_name: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        bucket_name,
        object_name
    )
}

/// Unique key under `folder`, keeping the original extension
pub fn image_object_name(folder: &str, filename: &str) -> String {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();
    format!("{}/{}{}", folder, uuid::Uuid::new_v4(), extension)
}

#[derive(Debug, thiserror::Error)]
pub enum MinioError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_link_trims_trailing_slash() {
        assert_eq!(
            download_link("https://cdn.example.com/", "media", "products/a.png"),
            "https://cdn.example.com/media/products/a.png"
        );
    }

    #[test]
    fn test_image_object_name_keeps_extension() {
        let name = image_object_name("products", "Photo.JPG");
        assert!(name.starts_with("products/"));
        assert!(name.ends_with(".jpg"));

        let no_ext = image_object_name("products", "photo");
        assert!(!no_ext.contains('.'));
    }
}
