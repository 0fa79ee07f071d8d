use chrono::{DateTime, Utc};

use super::{DubbingId, DubbingStatus, LanguageCode, UploadId};

#[derive(Debug, Clone)]
pub struct Dubbing {
    pub id: DubbingId,
    pub audio_upload_id: UploadId,
    pub target_language: LanguageCode,
    pub voice_id: String,
    pub dubbed_audio_url: Option<String>,
    pub status: DubbingStatus,
    pub created_at: DateTime<Utc>,
}

impl Dubbing {
    pub fn new(audio_upload_id: UploadId, target_language: LanguageCode, voice_id: String) -> Self {
        Self {
            id: DubbingId::new(),
            audio_upload_id,
            target_language,
            voice_id,
            dubbed_audio_url: None,
            status: DubbingStatus::Processing,
            created_at: Utc::now(),
        }
    }
}
