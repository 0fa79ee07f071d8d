use async_trait::async_trait;

use crate::application::ports::{AudioSource, AudioSourceError};

/// Downloads audio over plain HTTP; used to pull the original recording back
/// out of blob storage for transcription.
pub struct HttpAudioSource {
    client: reqwest::Client,
}

impl HttpAudioSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpAudioSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSource for HttpAudioSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AudioSourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AudioSourceError::DownloadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AudioSourceError::DownloadFailed(format!(
                "Failed to download audio: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AudioSourceError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
