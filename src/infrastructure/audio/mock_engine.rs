use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Test double returning a canned transcription or a canned failure, and
/// counting invocations.
pub struct MockTranscriptionEngine {
    response: Result<String, String>,
    calls: Mutex<u32>,
}

impl MockTranscriptionEngine {
    pub fn returning(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, TranscriptionError> {
        *self.calls.lock().unwrap() += 1;
        self.response
            .clone()
            .map_err(TranscriptionError::ApiRequestFailed)
    }
}
