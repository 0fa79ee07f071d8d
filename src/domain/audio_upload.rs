use chrono::{DateTime, Utc};

use super::{UploadId, UploadStatus};

#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub id: UploadId,
    pub filename: String,
    pub original_audio_url: String,
    pub transcription_text: Option<String>,
    pub status: UploadStatus,
    pub file_size_bytes: Option<i64>,
    pub duration_seconds: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl AudioUpload {
    /// A freshly uploaded recording, already stored and awaiting transcription.
    pub fn new(filename: String, original_audio_url: String, file_size_bytes: Option<i64>) -> Self {
        Self {
            id: UploadId::new(),
            filename,
            original_audio_url,
            transcription_text: None,
            status: UploadStatus::Transcribing,
            file_size_bytes,
            duration_seconds: None,
            created_at: Utc::now(),
        }
    }

    pub fn has_transcription(&self) -> bool {
        self.transcription_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_upload_starts_in_transcribing_state() {
        let upload = AudioUpload::new(
            "call.mp3".to_string(),
            "https://store/originals/call.mp3".to_string(),
            Some(1024),
        );

        assert_eq!(upload.status, UploadStatus::Transcribing);
        assert!(upload.transcription_text.is_none());
        assert!(!upload.has_transcription());
    }

    #[test]
    fn blank_transcription_does_not_count_as_present() {
        let mut upload = AudioUpload::new("a.mp3".to_string(), "https://x/a.mp3".to_string(), None);
        upload.transcription_text = Some("   ".to_string());

        assert!(!upload.has_transcription());

        upload.transcription_text = Some("Hello team".to_string());
        assert!(upload.has_transcription());
    }
}
