use async_trait::async_trait;

use crate::application::ports::{AudioSource, AudioSourceError};

/// Test double serving fixed bytes for any URL, or failing every fetch.
pub struct MockAudioSource {
    response: Result<Vec<u8>, String>,
}

impl MockAudioSource {
    pub fn returning(data: &[u8]) -> Self {
        Self {
            response: Ok(data.to_vec()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl AudioSource for MockAudioSource {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, AudioSourceError> {
        self.response
            .clone()
            .map_err(AudioSourceError::DownloadFailed)
    }
}
