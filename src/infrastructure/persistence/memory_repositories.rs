use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{DubbingRepository, RepositoryError, UploadRepository};
use crate::domain::{
    AudioUpload, Dubbing, DubbingId, DubbingStatus, UploadId, UploadStatus,
};

/// In-memory [`UploadRepository`] used in tests and local scaffolding.
#[derive(Default)]
pub struct MemoryUploadRepository {
    rows: Mutex<HashMap<UploadId, AudioUpload>>,
}

impl MemoryUploadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a row directly, bypassing the port.
    pub fn insert(&self, upload: AudioUpload) {
        self.rows.lock().unwrap().insert(upload.id, upload);
    }
}

#[async_trait]
impl UploadRepository for MemoryUploadRepository {
    async fn create(&self, upload: &AudioUpload) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().insert(upload.id, upload.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: UploadId) -> Result<Option<AudioUpload>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<AudioUpload>, RepositoryError> {
        let mut rows: Vec<AudioUpload> = self.rows.lock().unwrap().values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn set_transcription(&self, id: UploadId, text: &str) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;
        row.transcription_text = Some(text.to_string());
        row.status = UploadStatus::Completed;
        Ok(())
    }

    async fn update_status(
        &self,
        id: UploadId,
        status: UploadStatus,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;
        row.status = status;
        Ok(())
    }

    async fn delete(&self, id: UploadId) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// In-memory [`DubbingRepository`] counterpart.
#[derive(Default)]
pub struct MemoryDubbingRepository {
    rows: Mutex<HashMap<DubbingId, Dubbing>>,
}

impl MemoryDubbingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, dubbing: Dubbing) {
        self.rows.lock().unwrap().insert(dubbing.id, dubbing);
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl DubbingRepository for MemoryDubbingRepository {
    async fn create(&self, dubbing: &Dubbing) -> Result<(), RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .insert(dubbing.id, dubbing.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: DubbingId) -> Result<Option<Dubbing>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_for_upload(&self, upload_id: UploadId) -> Result<Vec<Dubbing>, RepositoryError> {
        let mut rows: Vec<Dubbing> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.audio_upload_id == upload_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn set_completed(&self, id: DubbingId, audio_url: &str) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;
        row.dubbed_audio_url = Some(audio_url.to_string());
        row.status = DubbingStatus::Completed;
        Ok(())
    }

    async fn update_status(
        &self,
        id: DubbingId,
        status: DubbingStatus,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.as_uuid().to_string()))?;
        row.status = status;
        Ok(())
    }

    async fn delete(&self, id: DubbingId) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}
