use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::environment::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub openai: OpenAiSettings,
    pub elevenlabs: ElevenLabsSettings,
    pub upload: UploadSettings,
    pub polling: PollingSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layered configuration: `config/default.toml`, then an optional
    /// environment-specific file, then `REDUB_`-prefixed env vars
    /// (`REDUB_OPENAI__API_KEY` etc).
    pub fn load() -> Result<Self, ConfigError> {
        let environment: Environment = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .try_into()
            .map_err(ConfigError::Message)?;

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(config::Environment::with_prefix("REDUB").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    /// Base of the public URLs handed out for stored blobs.
    pub public_base_url: String,
    pub azure_account: Option<String>,
    pub azure_access_key: Option<String>,
    pub azure_container: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub transcription_model: Option<String>,
    pub translation_model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingSettings {
    pub upload_interval_ms: u64,
    pub dubbing_interval_ms: u64,
    pub max_wait_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
