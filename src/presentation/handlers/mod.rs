mod create_dubbing;
mod dubbings;
mod health;
mod languages;
mod transcribe;
mod uploads;

pub use create_dubbing::create_dubbing_handler;
pub use dubbings::{delete_dubbing_handler, list_dubbings_handler, wait_dubbing_handler};
pub use health::health_handler;
pub use languages::languages_handler;
pub use transcribe::transcribe_audio_handler;
pub use uploads::{
    delete_upload_handler, get_upload_handler, list_uploads_handler, upload_audio_handler,
    wait_upload_handler,
};
