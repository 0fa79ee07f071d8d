use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::object_audio_store::ObjectAudioStore;

pub fn build_audio_store(
    settings: &StorageSettings,
) -> Result<Arc<dyn AudioStore>, AudioStoreError> {
    match settings.provider {
        StorageProviderSetting::Local => {
            let root = PathBuf::from(&settings.local_path);
            let store = ObjectAudioStore::local(root, &settings.public_base_url)?;
            Ok(Arc::new(store))
        }
        StorageProviderSetting::Azure => {
            let account = settings
                .azure_account
                .as_deref()
                .ok_or_else(|| AudioStoreError::UploadFailed("azure_account required".into()))?;
            let key = settings
                .azure_access_key
                .as_deref()
                .ok_or_else(|| AudioStoreError::UploadFailed("azure_access_key required".into()))?;
            let container = settings
                .azure_container
                .as_deref()
                .ok_or_else(|| AudioStoreError::UploadFailed("azure_container required".into()))?;
            let store = ObjectAudioStore::azure(account, key, container, &settings.public_base_url)?;
            Ok(Arc::new(store))
        }
    }
}
