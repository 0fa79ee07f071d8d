use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StorageKey;

/// [`AudioStore`] backed by any `object_store` implementation. Public URLs
/// are `{public_base_url}/{key}`; deletion accepts only URLs under that base
/// and ignores foreign ones.
pub struct ObjectAudioStore {
    inner: Arc<dyn ObjectStore>,
    public_base_url: String,
}

impl ObjectAudioStore {
    pub fn new(inner: Arc<dyn ObjectStore>, public_base_url: &str) -> Self {
        Self {
            inner,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn local(root: PathBuf, public_base_url: &str) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&root)
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(root)
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(fs), public_base_url))
    }

    pub fn azure(
        account: &str,
        access_key: &str,
        container: &str,
        public_base_url: &str,
    ) -> Result<Self, AudioStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(store), public_base_url))
    }

    fn key_for(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base_url)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .filter(|key| !key.is_empty())
    }
}

#[async_trait]
impl AudioStore for ObjectAudioStore {
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, AudioStoreError> {
        let store_path = StorePath::from(key.as_str());

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());

        self.inner
            .put_opts(
                &store_path,
                PutPayload::from(data),
                PutOptions {
                    attributes,
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;

        Ok(format!("{}/{}", self.public_base_url, key.as_str()))
    }

    async fn delete(&self, url: &str) -> Result<(), AudioStoreError> {
        let Some(key) = self.key_for(url) else {
            tracing::warn!(url = %url, "Delete requested for URL outside this store");
            return Ok(());
        };

        let store_path = StorePath::from(key.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| AudioStoreError::DeleteFailed(e.to_string()))
    }
}
