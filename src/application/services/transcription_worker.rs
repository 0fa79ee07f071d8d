use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{TranscribeRequest, TranscriptionService};
use crate::domain::UploadId;

pub struct TranscriptionMessage {
    pub upload_id: UploadId,
    pub audio_url: String,
}

/// Background consumer for transcription jobs enqueued by the upload
/// endpoint. Jobs run one at a time; each failure is already persisted on the
/// upload row by the service, so here it is only logged.
pub struct TranscriptionWorker {
    receiver: mpsc::Receiver<TranscriptionMessage>,
    service: Arc<TranscriptionService>,
}

impl TranscriptionWorker {
    pub fn new(
        receiver: mpsc::Receiver<TranscriptionMessage>,
        service: Arc<TranscriptionService>,
    ) -> Self {
        Self { receiver, service }
    }

    pub async fn run(mut self) {
        tracing::info!("Transcription worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "transcription_job",
                upload_id = %msg.upload_id.as_uuid(),
            );
            let _guard = span.enter();

            let request = TranscribeRequest {
                upload_id: Some(msg.upload_id.as_uuid().to_string()),
                audio_url: Some(msg.audio_url),
            };

            if let Err(e) = self.service.transcribe_upload(request).await {
                tracing::error!(error = %e, "Transcription job failed");
            }
        }
        tracing::info!("Transcription worker stopped: channel closed");
    }
}
