use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::TranscribeRequest;
use crate::infrastructure::observability::transcript_preview;
use crate::presentation::state::AppState;

/// Fields are optional so a missing one reaches the job as a validation
/// failure instead of a body-parsing rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeAudioRequest {
    #[serde(default)]
    pub upload_id: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Serialize)]
pub struct TranscribeAudioResponse {
    pub success: bool,
    pub transcription: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Runs one transcription job inline and returns the text. Every failure,
/// validation included, is reported as a 500 `{error}` payload; the durable
/// record of failure is the upload row's status.
#[tracing::instrument(skip(state, request))]
pub async fn transcribe_audio_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeAudioRequest>,
) -> impl IntoResponse {
    let request = TranscribeRequest {
        upload_id: request.upload_id,
        audio_url: request.audio_url,
    };

    match state.transcription_service.transcribe_upload(request).await {
        Ok(transcription) => {
            tracing::debug!(
                transcription = %transcript_preview(&transcription),
                "Returning transcription"
            );
            (
                StatusCode::OK,
                Json(TranscribeAudioResponse {
                    success: true,
                    transcription,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription job failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
