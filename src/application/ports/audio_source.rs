use async_trait::async_trait;

/// Fetches the audio byte stream behind a public URL.
#[async_trait]
pub trait AudioSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AudioSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioSourceError {
    #[error("download failed: {0}")]
    DownloadFailed(String),
}
