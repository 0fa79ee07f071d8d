use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{DubbingRepository, UploadRepository};
use crate::application::services::{
    DubbingService, StatusPoller, TranscriptionMessage, TranscriptionService, UploadService,
};

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub dubbing_service: Arc<DubbingService>,
    pub upload_service: Arc<UploadService>,
    pub status_poller: Arc<StatusPoller>,
    pub upload_repository: Arc<dyn UploadRepository>,
    pub dubbing_repository: Arc<dyn DubbingRepository>,
    pub transcription_sender: mpsc::Sender<TranscriptionMessage>,
}
