use async_trait::async_trait;

use crate::domain::{Dubbing, DubbingId, DubbingStatus, UploadId};

use super::RepositoryError;

#[async_trait]
pub trait DubbingRepository: Send + Sync {
    async fn create(&self, dubbing: &Dubbing) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: DubbingId) -> Result<Option<Dubbing>, RepositoryError>;

    /// All dubbings of one upload, newest first.
    async fn list_for_upload(&self, upload_id: UploadId) -> Result<Vec<Dubbing>, RepositoryError>;

    /// Record a finished dub: sets the audio URL and moves the row to
    /// `completed` in one write.
    async fn set_completed(&self, id: DubbingId, audio_url: &str) -> Result<(), RepositoryError>;

    async fn update_status(
        &self,
        id: DubbingId,
        status: DubbingStatus,
    ) -> Result<(), RepositoryError>;

    async fn delete(&self, id: DubbingId) -> Result<(), RepositoryError>;
}
