use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub voices: Vec<VoiceEntry>,
}

#[derive(Serialize)]
pub struct VoiceEntry {
    pub id: &'static str,
    pub name: &'static str,
}

/// Static dubbing catalog: the supported target languages and the ElevenLabs
/// voices offered for each.
pub async fn languages_handler() -> impl IntoResponse {
    let languages = vec![
        LanguageEntry {
            code: "en",
            name: "English",
            voices: vec![
                VoiceEntry { id: "9BWtsMINqrJLrRacOk9x", name: "Aria (Female)" },
                VoiceEntry { id: "CwhRBWXzGAHq8TQ4Fs17", name: "Roger (Male)" },
                VoiceEntry { id: "EXAVITQu4vr4xnSDxMaL", name: "Sarah (Female)" },
            ],
        },
        LanguageEntry {
            code: "es",
            name: "Spanish",
            voices: vec![
                VoiceEntry { id: "cgSgspJ2msm6clMCkdW9", name: "Jessica (Female)" },
                VoiceEntry { id: "onwK4e9ZLuTAKqWW03F9", name: "Daniel (Male)" },
            ],
        },
        LanguageEntry {
            code: "fr",
            name: "French",
            voices: vec![
                VoiceEntry { id: "pFZP5JQG7iQjIQuC4Bku", name: "Lily (Female)" },
                VoiceEntry { id: "nPczCjzI2devNBz1zQrb", name: "Brian (Male)" },
            ],
        },
        LanguageEntry {
            code: "de",
            name: "German",
            voices: vec![
                VoiceEntry { id: "XB0fDUnXU5powFXDhCwa", name: "Charlotte (Female)" },
                VoiceEntry { id: "bIHbv24MWmeRgasZH58o", name: "Will (Male)" },
            ],
        },
        LanguageEntry {
            code: "it",
            name: "Italian",
            voices: vec![
                VoiceEntry { id: "XrExE9yKIg1WjnnlVkGX", name: "Matilda (Female)" },
                VoiceEntry { id: "cjVigY5qzO86Huf0OWal", name: "Eric (Male)" },
            ],
        },
        LanguageEntry {
            code: "pt",
            name: "Portuguese",
            voices: vec![
                VoiceEntry { id: "pqHfZKP75CvOlQylNhV4", name: "Bill (Male)" },
                VoiceEntry { id: "TX3LPaxmHKxFdv7VOQHJ", name: "Liam (Male)" },
            ],
        },
    ];

    (StatusCode::OK, Json(languages))
}
