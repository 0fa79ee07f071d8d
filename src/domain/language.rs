use std::fmt;

/// Short target-language code as supplied by clients ("es", "fr", ...).
///
/// Unknown codes are accepted and carried through verbatim; only the display
/// name falls back to English.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const ENGLISH: &'static str = "en";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether speech in this language can be synthesized straight from the
    /// source transcription, skipping translation.
    pub fn is_english(&self) -> bool {
        self.0 == Self::ENGLISH
    }

    pub fn display_name(&self) -> &'static str {
        match self.0.as_str() {
            "en" => "English",
            "es" => "Spanish",
            "fr" => "French",
            "de" => "German",
            "it" => "Italian",
            "pt" => "Portuguese",
            _ => "English",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_display_names() {
        assert_eq!(LanguageCode::new("es").display_name(), "Spanish");
        assert_eq!(LanguageCode::new("pt").display_name(), "Portuguese");
    }

    #[test]
    fn unknown_code_falls_back_to_english_name() {
        assert_eq!(LanguageCode::new("xx").display_name(), "English");
        assert_eq!(LanguageCode::new("xx").as_str(), "xx");
    }

    #[test]
    fn only_en_skips_translation() {
        assert!(LanguageCode::new("en").is_english());
        assert!(!LanguageCode::new("es").is_english());
    }
}
