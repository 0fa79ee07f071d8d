use async_trait::async_trait;

use crate::domain::{AudioUpload, UploadId, UploadStatus};

use super::RepositoryError;

#[async_trait]
pub trait UploadRepository: Send + Sync {
    async fn create(&self, upload: &AudioUpload) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: UploadId) -> Result<Option<AudioUpload>, RepositoryError>;

    /// Recent uploads, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<AudioUpload>, RepositoryError>;

    /// Record a successful transcription: sets the text and moves the row to
    /// `completed` in one write.
    async fn set_transcription(&self, id: UploadId, text: &str) -> Result<(), RepositoryError>;

    async fn update_status(&self, id: UploadId, status: UploadStatus)
        -> Result<(), RepositoryError>;

    async fn delete(&self, id: UploadId) -> Result<(), RepositoryError>;
}
