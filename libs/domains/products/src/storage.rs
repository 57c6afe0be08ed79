//! Product image storage.

use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// An image file received as part of a multipart request.
///
/// The bytes are owned by the request and dropped once the upload has been
/// persisted or rejected.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied file name, informational only
    pub file_name: String,
    /// Declared media type, used to pick the stored extension
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Storage backend for uploaded product images.
///
/// Returns the public URL path under which the stored image is served.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, upload: ImageUpload) -> ProductResult<String>;
}

/// Filesystem-backed image store.
///
/// Writes uploads under a configured root directory with fresh UUID file
/// names and reports them as `{public_prefix}/{file}`. Serving the files
/// is left to whatever fronts the root directory.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
    public_prefix: String,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }
}

/// Stored extension for an accepted image media type.
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, upload: ImageUpload) -> ProductResult<String> {
        let extension = extension_for(&upload.content_type).ok_or_else(|| {
            ProductError::Validation(format!(
                "Unsupported image content type '{}'",
                upload.content_type
            ))
        })?;

        let file_name = format!("{}.{}", Uuid::now_v7(), extension);
        let path = self.root.join(&file_name);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ProductError::Storage(e.to_string()))?;
        tokio::fs::write(&path, &upload.data)
            .await
            .map_err(|e| ProductError::Storage(e.to_string()))?;

        tracing::info!(
            file = %file_name,
            original = %upload.file_name,
            size = upload.data.len(),
            "Stored product image"
        );

        Ok(format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            file_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (FsImageStore, PathBuf) {
        let root = std::env::temp_dir().join(format!("registry-images-{}", Uuid::now_v7()));
        (FsImageStore::new(root.clone(), "/uploads"), root)
    }

    fn png_upload() -> ImageUpload {
        ImageUpload {
            file_name: "apple.png".to_string(),
            content_type: "image/png".to_string(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_public_url() {
        let (store, root) = temp_store();

        let url = store.save(png_upload()).await.unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        let file_name = url.rsplit('/').next().unwrap();
        let stored = tokio::fs::read(root.join(file_name)).await.unwrap();
        assert_eq!(stored, vec![0x89, 0x50, 0x4e, 0x47]);

        tokio::fs::remove_dir_all(root).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_rejects_non_image_content_type() {
        let (store, _root) = temp_store();

        let upload = ImageUpload {
            file_name: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            data: b"not an image".to_vec(),
        };

        let result = store.save(upload).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }
}
