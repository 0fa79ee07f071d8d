use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AudioStore, AudioStoreError, DubbingRepository, RepositoryError, UploadRepository,
};
use crate::domain::{AudioUpload, StorageKey, UploadId};

const ACCEPTED_CONTENT_TYPES: [&str; 4] =
    ["audio/mpeg", "audio/wav", "audio/mp4", "audio/m4a"];

/// Intake and removal of uploaded recordings: blob storage plus the
/// `audio_uploads` row, with cascade cleanup on delete.
pub struct UploadService {
    uploads: Arc<dyn UploadRepository>,
    dubbings: Arc<dyn DubbingRepository>,
    store: Arc<dyn AudioStore>,
    max_file_size_bytes: i64,
}

impl UploadService {
    pub fn new(
        uploads: Arc<dyn UploadRepository>,
        dubbings: Arc<dyn DubbingRepository>,
        store: Arc<dyn AudioStore>,
        max_file_size_mb: u64,
    ) -> Self {
        Self {
            uploads,
            dubbings,
            store,
            max_file_size_bytes: (max_file_size_mb * 1024 * 1024) as i64,
        }
    }

    /// Store the blob under `originals/` and insert the row already in
    /// `transcribing` state; the caller enqueues the transcription job.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn store_upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<AudioUpload, UploadError> {
        if !ACCEPTED_CONTENT_TYPES.contains(&content_type) {
            return Err(UploadError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }
        if data.len() as i64 > self.max_file_size_bytes {
            return Err(UploadError::FileTooLarge {
                size: data.len() as i64,
                limit: self.max_file_size_bytes,
            });
        }

        let size = data.len() as i64;
        let key = StorageKey::original(filename);
        let url = self
            .store
            .put(&key, data, content_type)
            .await
            .map_err(UploadError::Storage)?;

        let upload = AudioUpload::new(filename.to_string(), url, Some(size));
        self.uploads
            .create(&upload)
            .await
            .map_err(UploadError::Repository)?;

        tracing::info!(
            upload_id = %upload.id.as_uuid(),
            filename = %upload.filename,
            "Upload stored"
        );

        Ok(upload)
    }

    /// Remove an upload and everything hanging off it: dubbing blobs, dubbing
    /// rows, the original blob, then the upload row. Blob deletions are
    /// best-effort; row deletions are not.
    #[tracing::instrument(skip(self))]
    pub async fn delete_upload(&self, id: UploadId) -> Result<(), UploadError> {
        let upload = self
            .uploads
            .get_by_id(id)
            .await
            .map_err(UploadError::Repository)?
            .ok_or_else(|| UploadError::NotFound(id))?;

        let dubbings = self
            .dubbings
            .list_for_upload(id)
            .await
            .map_err(UploadError::Repository)?;

        for dubbing in &dubbings {
            if let Some(url) = dubbing.dubbed_audio_url.as_deref() {
                if let Err(e) = self.store.delete(url).await {
                    tracing::warn!(error = %e, url = %url, "Failed to delete dubbed audio blob");
                }
            }
            self.dubbings
                .delete(dubbing.id)
                .await
                .map_err(UploadError::Repository)?;
        }

        if let Err(e) = self.store.delete(&upload.original_audio_url).await {
            tracing::warn!(
                error = %e,
                url = %upload.original_audio_url,
                "Failed to delete original audio blob"
            );
        }

        self.uploads
            .delete(id)
            .await
            .map_err(UploadError::Repository)?;

        tracing::info!(
            upload_id = %id.as_uuid(),
            dubbings = dubbings.len(),
            "Upload deleted"
        );

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("file too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: i64, limit: i64 },
    #[error("upload not found: {}", .0.as_uuid())]
    NotFound(UploadId),
    #[error("storage: {0}")]
    Storage(AudioStoreError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
