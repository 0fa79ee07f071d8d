use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

/// Test double producing fixed audio bytes and recording the text it was
/// asked to speak, so tests can assert the translation fallback.
pub struct MockSpeechSynthesizer {
    response: Result<Vec<u8>, String>,
    last_text: Mutex<Option<String>>,
}

impl MockSpeechSynthesizer {
    pub fn returning(audio: &[u8]) -> Self {
        Self {
            response: Ok(audio.to_vec()),
            last_text: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            last_text: Mutex::new(None),
        }
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str, _voice_id: &str) -> Result<Bytes, SynthesisError> {
        *self.last_text.lock().unwrap() = Some(text.to_string());
        self.response
            .clone()
            .map(Bytes::from)
            .map_err(SynthesisError::ApiRequestFailed)
    }
}
