use async_trait::async_trait;
use bytes::Bytes;

/// Text-to-speech backend producing an audio byte stream for a given voice.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Bytes, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unknown voice: {0}")]
    UnknownVoice(String),
}
