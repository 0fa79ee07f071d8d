use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StorageKey;

const MOCK_BASE_URL: &str = "https://mock-store";

/// In-memory [`AudioStore`] keyed by public URL.
#[derive(Default)]
pub struct MockAudioStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(url)
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

#[async_trait]
impl AudioStore for MockAudioStore {
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        _content_type: &str,
    ) -> Result<String, AudioStoreError> {
        let url = format!("{}/{}", MOCK_BASE_URL, key.as_str());
        self.blobs.lock().unwrap().insert(url.clone(), data.to_vec());
        Ok(url)
    }

    async fn delete(&self, url: &str) -> Result<(), AudioStoreError> {
        self.blobs.lock().unwrap().remove(url);
        Ok(())
    }
}
