use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{
    AudioSource, AudioSourceError, RepositoryError, TranscriptionEngine, TranscriptionError,
    UploadRepository,
};
use crate::domain::{UploadId, UploadStatus};

/// Inputs of one transcription job, as supplied by the caller. Both fields
/// are validated here rather than at deserialization so that a missing field
/// surfaces as a job error, not a body-parsing rejection.
#[derive(Debug, Clone)]
pub struct TranscribeRequest {
    pub upload_id: Option<String>,
    pub audio_url: Option<String>,
}

/// Runs the transcription pipeline for one upload: download the audio,
/// submit it to the speech-to-text engine, persist the terminal state.
pub struct TranscriptionService {
    audio_source: Arc<dyn AudioSource>,
    engine: Arc<dyn TranscriptionEngine>,
    uploads: Arc<dyn UploadRepository>,
}

impl TranscriptionService {
    pub fn new(
        audio_source: Arc<dyn AudioSource>,
        engine: Arc<dyn TranscriptionEngine>,
        uploads: Arc<dyn UploadRepository>,
    ) -> Self {
        Self {
            audio_source,
            engine,
            uploads,
        }
    }

    /// Single attempt, no retry. On any failure after validation the upload
    /// row is marked `failed` best-effort before the error is returned.
    #[tracing::instrument(skip(self, request))]
    pub async fn transcribe_upload(
        &self,
        request: TranscribeRequest,
    ) -> Result<String, TranscriptionJobError> {
        let (upload_id, audio_url) = validate(request)?;

        tracing::info!(
            upload_id = %upload_id.as_uuid(),
            audio_url = %audio_url,
            "Starting transcription"
        );

        let result = self.run_pipeline(upload_id, &audio_url).await;

        if result.is_err() {
            self.mark_failed(upload_id).await;
        }

        result
    }

    async fn run_pipeline(
        &self,
        upload_id: UploadId,
        audio_url: &str,
    ) -> Result<String, TranscriptionJobError> {
        let audio_data = self
            .audio_source
            .fetch(audio_url)
            .await
            .map_err(TranscriptionJobError::Download)?;

        tracing::debug!(bytes = audio_data.len(), "Audio downloaded");

        let text = self
            .engine
            .transcribe(&audio_data)
            .await
            .map_err(TranscriptionJobError::Engine)?;

        tracing::info!(
            upload_id = %upload_id.as_uuid(),
            chars = text.len(),
            "Transcription completed"
        );

        self.uploads
            .set_transcription(upload_id, &text)
            .await
            .map_err(TranscriptionJobError::Repository)?;

        Ok(text)
    }

    /// Secondary failure-path write. Its own failure is logged, never raised.
    async fn mark_failed(&self, upload_id: UploadId) {
        if let Err(e) = self
            .uploads
            .update_status(upload_id, UploadStatus::Failed)
            .await
        {
            tracing::warn!(
                error = %e,
                upload_id = %upload_id.as_uuid(),
                "Failed to mark upload as failed"
            );
        }
    }
}

fn validate(request: TranscribeRequest) -> Result<(UploadId, String), TranscriptionJobError> {
    let upload_id = request
        .upload_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            TranscriptionJobError::Validation("uploadId and audioUrl are required".to_string())
        })?;

    let audio_url = request
        .audio_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            TranscriptionJobError::Validation("uploadId and audioUrl are required".to_string())
        })?;

    let uuid = Uuid::parse_str(upload_id).map_err(|_| {
        TranscriptionJobError::Validation(format!("Invalid upload id: {}", upload_id))
    })?;

    Ok((UploadId::from_uuid(uuid), audio_url.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionJobError {
    #[error("{0}")]
    Validation(String),
    #[error("audio download: {0}")]
    Download(AudioSourceError),
    #[error("transcription: {0}")]
    Engine(TranscriptionError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}

impl TranscriptionJobError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TranscriptionJobError::Validation(_))
    }
}
