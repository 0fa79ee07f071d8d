mod mock_store;
mod object_audio_store;
mod store_factory;

pub use mock_store::MockAudioStore;
pub use object_audio_store::ObjectAudioStore;
pub use store_factory::build_audio_store;
