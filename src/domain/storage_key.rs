use std::fmt;

use chrono::Utc;

use super::DubbingId;

/// Object-store key for an audio blob.
///
/// Originals live under `originals/`, synthesized dubs under `dubbed/`; both
/// carry a timestamp so repeated uploads of the same file never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn original(filename: &str) -> Self {
        let timestamp = Utc::now()
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        Self(format!("originals/{}-{}", timestamp, filename))
    }

    pub fn dubbed(dubbing_id: &DubbingId) -> Self {
        Self(format!(
            "dubbed/{}-{}.mp3",
            dubbing_id.as_uuid(),
            Utc::now().timestamp_millis()
        ))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_key_is_prefixed_and_keeps_filename() {
        let key = StorageKey::original("call.mp3");
        assert!(key.as_str().starts_with("originals/"));
        assert!(key.as_str().ends_with("-call.mp3"));
    }

    #[test]
    fn dubbed_key_contains_dubbing_id() {
        let id = DubbingId::new();
        let key = StorageKey::dubbed(&id);
        assert!(key.as_str().starts_with("dubbed/"));
        assert!(key.as_str().contains(&id.as_uuid().to_string()));
        assert!(key.as_str().ends_with(".mp3"));
    }

    #[test]
    fn two_original_keys_for_same_filename_differ() {
        // Millisecond timestamps make collisions effectively impossible in
        // practice; equality would only occur within the same millisecond.
        let a = StorageKey::original("x.mp3");
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = StorageKey::original("x.mp3");
        assert_ne!(a, b);
    }
}
