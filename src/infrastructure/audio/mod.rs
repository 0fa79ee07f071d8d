mod http_audio_source;
mod mock_engine;
mod mock_source;
mod openai_whisper_engine;

pub use http_audio_source::HttpAudioSource;
pub use mock_engine::MockTranscriptionEngine;
pub use mock_source::MockAudioSource;
pub use openai_whisper_engine::OpenAiWhisperEngine;
