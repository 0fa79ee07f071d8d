use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StorageKey;

/// Object storage for original and dubbed audio, exposing public URLs.
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Store a blob and return its public URL.
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, AudioStoreError>;

    /// Delete the blob behind a public URL previously returned by `put`.
    /// URLs not owned by this store are ignored.
    async fn delete(&self, url: &str) -> Result<(), AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
