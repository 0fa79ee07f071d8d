mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, ElevenLabsSettings, LoggingSettings, OpenAiSettings, PollingSettings,
    ServerSettings, Settings, StorageProviderSetting, StorageSettings, UploadSettings,
};
