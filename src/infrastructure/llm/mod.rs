mod mock_translator;
mod openai_translator;

pub use mock_translator::MockTranslator;
pub use openai_translator::OpenAiTranslator;
