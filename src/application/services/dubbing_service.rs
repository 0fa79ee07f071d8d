use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{
    AudioStore, AudioStoreError, DubbingRepository, RepositoryError, SpeechSynthesizer,
    SynthesisError, Translator, UploadRepository,
};
use crate::domain::{Dubbing, DubbingId, DubbingStatus, LanguageCode, StorageKey, UploadId};

#[derive(Debug, Clone)]
pub struct DubbingRequest {
    pub upload_id: Option<String>,
    pub target_language: Option<String>,
    pub voice_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DubbingOutcome {
    pub dubbing_id: DubbingId,
    pub audio_url: String,
}

/// Runs the dubbing pipeline for one upload: translate the transcription
/// (non-English targets only), synthesize speech, store the audio, finalize
/// the row.
pub struct DubbingService {
    uploads: Arc<dyn UploadRepository>,
    dubbings: Arc<dyn DubbingRepository>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn AudioStore>,
}

impl DubbingService {
    pub fn new(
        uploads: Arc<dyn UploadRepository>,
        dubbings: Arc<dyn DubbingRepository>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<dyn AudioStore>,
    ) -> Self {
        Self {
            uploads,
            dubbings,
            translator,
            synthesizer,
            store,
        }
    }

    /// Preconditions are checked before any row is created; once the
    /// `processing` row exists, every failure branch moves it to `failed`
    /// best-effort before the error is returned.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_dubbing(
        &self,
        request: DubbingRequest,
    ) -> Result<DubbingOutcome, DubbingJobError> {
        let (upload_id, target_language, voice_id) = validate(request)?;

        tracing::info!(
            upload_id = %upload_id.as_uuid(),
            target_language = %target_language,
            voice_id = %voice_id,
            "Starting dubbing"
        );

        let upload = self
            .uploads
            .get_by_id(upload_id)
            .await
            .map_err(DubbingJobError::Repository)?
            .ok_or_else(|| {
                DubbingJobError::Validation(format!(
                    "Upload not found: {}",
                    upload_id.as_uuid()
                ))
            })?;

        if !upload.has_transcription() {
            return Err(DubbingJobError::Validation(
                "No transcription available for dubbing".to_string(),
            ));
        }
        let transcription = upload.transcription_text.clone().unwrap_or_default();

        // Durable intent: the row exists before any external call, so a crash
        // mid-pipeline leaves a `processing` row rather than silent loss.
        let dubbing = Dubbing::new(upload_id, target_language.clone(), voice_id.clone());
        let dubbing_id = dubbing.id;
        self.dubbings
            .create(&dubbing)
            .await
            .map_err(DubbingJobError::Repository)?;

        tracing::debug!(dubbing_id = %dubbing_id.as_uuid(), "Dubbing record created");

        let result = self
            .run_pipeline(dubbing_id, &transcription, &target_language, &voice_id)
            .await;

        if result.is_err() {
            self.mark_failed(dubbing_id).await;
        }

        result.map(|audio_url| DubbingOutcome {
            dubbing_id,
            audio_url,
        })
    }

    /// Delete a single dubbing and its stored audio. The parent upload is
    /// never touched.
    #[tracing::instrument(skip(self))]
    pub async fn delete_dubbing(&self, id: DubbingId) -> Result<(), DubbingJobError> {
        let dubbing = self
            .dubbings
            .get_by_id(id)
            .await
            .map_err(DubbingJobError::Repository)?
            .ok_or_else(|| {
                DubbingJobError::Validation(format!("Dubbing not found: {}", id.as_uuid()))
            })?;

        if let Some(url) = dubbing.dubbed_audio_url.as_deref() {
            if let Err(e) = self.store.delete(url).await {
                tracing::warn!(error = %e, url = %url, "Failed to delete dubbed audio blob");
            }
        }

        self.dubbings
            .delete(id)
            .await
            .map_err(DubbingJobError::Repository)
    }

    async fn run_pipeline(
        &self,
        dubbing_id: DubbingId,
        transcription: &str,
        target_language: &LanguageCode,
        voice_id: &str,
    ) -> Result<String, DubbingJobError> {
        let text_to_speak = if target_language.is_english() {
            transcription.to_string()
        } else {
            // Translation failure is non-fatal: fall back to the original
            // text rather than failing the whole dub.
            match self.translator.translate(transcription, target_language).await {
                Ok(translated) => {
                    tracing::debug!(chars = translated.len(), "Translation completed");
                    translated
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Translation failed, using original text");
                    transcription.to_string()
                }
            }
        };

        let audio = self
            .synthesizer
            .synthesize(&text_to_speak, voice_id)
            .await
            .map_err(DubbingJobError::Synthesis)?;

        tracing::debug!(bytes = audio.len(), "Speech synthesized");

        let key = StorageKey::dubbed(&dubbing_id);
        let audio_url = self
            .store
            .put(&key, audio, "audio/mpeg")
            .await
            .map_err(DubbingJobError::Storage)?;

        self.dubbings
            .set_completed(dubbing_id, &audio_url)
            .await
            .map_err(DubbingJobError::Repository)?;

        tracing::info!(dubbing_id = %dubbing_id.as_uuid(), "Dubbing completed");

        Ok(audio_url)
    }

    /// Secondary failure-path write. Its own failure is logged, never raised.
    async fn mark_failed(&self, dubbing_id: DubbingId) {
        if let Err(e) = self
            .dubbings
            .update_status(dubbing_id, DubbingStatus::Failed)
            .await
        {
            tracing::warn!(
                error = %e,
                dubbing_id = %dubbing_id.as_uuid(),
                "Failed to mark dubbing as failed"
            );
        }
    }
}

fn validate(
    request: DubbingRequest,
) -> Result<(UploadId, LanguageCode, String), DubbingJobError> {
    let missing = || {
        DubbingJobError::Validation(
            "uploadId, targetLanguage, and voiceId are required".to_string(),
        )
    };

    let upload_id = request
        .upload_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(missing)?;
    let target_language = request
        .target_language
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(missing)?;
    let voice_id = request
        .voice_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(missing)?;

    let uuid = Uuid::parse_str(upload_id)
        .map_err(|_| DubbingJobError::Validation(format!("Invalid upload id: {}", upload_id)))?;

    Ok((
        UploadId::from_uuid(uuid),
        LanguageCode::new(target_language),
        voice_id.to_string(),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum DubbingJobError {
    #[error("{0}")]
    Validation(String),
    #[error("speech synthesis: {0}")]
    Synthesis(SynthesisError),
    #[error("audio storage: {0}")]
    Storage(AudioStoreError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}

impl DubbingJobError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DubbingJobError::Validation(_))
    }
}
