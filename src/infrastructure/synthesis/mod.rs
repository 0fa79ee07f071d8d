mod eleven_labs_synthesizer;
mod mock_synthesizer;

pub use eleven_labs_synthesizer::ElevenLabsSynthesizer;
pub use mock_synthesizer::MockSpeechSynthesizer;
