use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LanguageCode;

const MAX_TOKENS: u32 = 1000;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Translation via OpenAI chat completions.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiTranslator {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-4.1-2025-04-14".to_string()),
        }
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let instruction = format!(
            "Translate the following text to {}. Preserve the tone and meaning \
             while making it sound natural in the target language.",
            target.display_name()
        );

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!(model = %self.model, target = %target, "Requesting translation");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        let translated = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| TranslationError::InvalidResponse("no choices returned".to_string()))?;

        tracing::info!(chars = translated.len(), target = %target, "Translation completed");

        Ok(translated)
    }
}
