use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LanguageCode;

/// Test double returning a canned translation or a canned failure, and
/// counting invocations so tests can assert the English bypass.
pub struct MockTranslator {
    response: Result<String, String>,
    calls: Mutex<u32>,
}

impl MockTranslator {
    pub fn returning(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        _text: &str,
        _target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        *self.calls.lock().unwrap() += 1;
        self.response
            .clone()
            .map_err(TranslationError::ApiRequestFailed)
    }
}
