mod audio_upload;
mod dubbing;
mod dubbing_id;
mod dubbing_status;
mod language;
mod storage_key;
mod upload_id;
mod upload_status;

pub use audio_upload::AudioUpload;
pub use dubbing::Dubbing;
pub use dubbing_id::DubbingId;
pub use dubbing_status::DubbingStatus;
pub use language::LanguageCode;
pub use storage_key::StorageKey;
pub use upload_id::UploadId;
pub use upload_status::UploadStatus;
