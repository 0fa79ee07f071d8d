mod dubbing_service;
mod poller;
mod transcription_service;
mod transcription_worker;
mod upload_service;

pub use dubbing_service::{DubbingJobError, DubbingOutcome, DubbingRequest, DubbingService};
pub use poller::{PollSettings, StatusPoller};
pub use transcription_service::{TranscribeRequest, TranscriptionJobError, TranscriptionService};
pub use transcription_worker::{TranscriptionMessage, TranscriptionWorker};
pub use upload_service::{UploadError, UploadService};
