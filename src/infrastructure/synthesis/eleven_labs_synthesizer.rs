use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

#[derive(Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// Speech synthesis via the ElevenLabs text-to-speech API.
pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_id: String,
}

impl ElevenLabsSynthesizer {
    pub fn new(api_key: String, base_url: Option<String>, model_id: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.elevenlabs.io".to_string()),
            model_id: model_id.unwrap_or_else(|| "eleven_multilingual_v2".to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Bytes, SynthesisError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);

        let request = TtsRequest {
            text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.5,
            },
        };

        tracing::debug!(voice_id = %voice_id, chars = text.len(), "Requesting speech synthesis");

        let response = self
            .client
            .post(&url)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(bytes = audio.len(), voice_id = %voice_id, "Speech synthesized");

        Ok(audio)
    }
}
