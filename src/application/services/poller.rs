use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{DubbingRepository, RepositoryError, UploadRepository};
use crate::domain::{AudioUpload, Dubbing, DubbingId, UploadId};

/// Fixed re-read intervals for the two entity kinds, plus an overall budget
/// after which the latest observed row is returned even if still transient.
#[derive(Debug, Clone)]
pub struct PollSettings {
    pub upload_interval: Duration,
    pub dubbing_interval: Duration,
    pub max_wait: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            upload_interval: Duration::from_secs(2),
            dubbing_interval: Duration::from_secs(3),
            max_wait: Duration::from_secs(30),
        }
    }
}

/// Observational polling of job state: re-reads a row on a fixed interval
/// until its status is terminal. Performs no mutation, so it is safe to run
/// concurrently with the jobs it watches.
pub struct StatusPoller {
    uploads: Arc<dyn UploadRepository>,
    dubbings: Arc<dyn DubbingRepository>,
    settings: PollSettings,
}

impl StatusPoller {
    pub fn new(
        uploads: Arc<dyn UploadRepository>,
        dubbings: Arc<dyn DubbingRepository>,
        settings: PollSettings,
    ) -> Self {
        Self {
            uploads,
            dubbings,
            settings,
        }
    }

    /// Returns the first terminal row observed, or the latest transient row
    /// once the wait budget is spent. `None` if the row does not exist.
    pub async fn wait_for_upload(
        &self,
        id: UploadId,
    ) -> Result<Option<AudioUpload>, RepositoryError> {
        let deadline = tokio::time::Instant::now() + self.settings.max_wait;

        loop {
            let row = self.uploads.get_by_id(id).await?;
            match row {
                Some(upload) if !upload.status.is_terminal() => {
                    if tokio::time::Instant::now() >= deadline {
                        return Ok(Some(upload));
                    }
                    tokio::time::sleep(self.settings.upload_interval).await;
                }
                other => return Ok(other),
            }
        }
    }

    /// Dubbing counterpart of [`wait_for_upload`](Self::wait_for_upload).
    pub async fn wait_for_dubbing(
        &self,
        id: DubbingId,
    ) -> Result<Option<Dubbing>, RepositoryError> {
        let deadline = tokio::time::Instant::now() + self.settings.max_wait;

        loop {
            let row = self.dubbings.get_by_id(id).await?;
            match row {
                Some(dubbing) if !dubbing.status.is_terminal() => {
                    if tokio::time::Instant::now() >= deadline {
                        return Ok(Some(dubbing));
                    }
                    tokio::time::sleep(self.settings.dubbing_interval).await;
                }
                other => return Ok(other),
            }
        }
    }
}
