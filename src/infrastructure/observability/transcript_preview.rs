const MAX_VISIBLE_LENGTH: usize = 100;

/// Shortens transcription text for log lines. Transcripts can run to many
/// kilobytes; logs only need enough to recognize the recording.
pub fn transcript_preview(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.chars().count() > MAX_VISIBLE_LENGTH {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, trimmed.chars().count())
    } else {
        trimmed.to_string()
    }
}
