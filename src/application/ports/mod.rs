mod audio_source;
mod audio_store;
mod dubbing_repository;
mod repository_error;
mod speech_synthesizer;
mod transcription_engine;
mod translator;
mod upload_repository;

pub use audio_source::{AudioSource, AudioSourceError};
pub use audio_store::{AudioStore, AudioStoreError};
pub use dubbing_repository::DubbingRepository;
pub use repository_error::RepositoryError;
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translator::{TranslationError, Translator};
pub use upload_repository::UploadRepository;
