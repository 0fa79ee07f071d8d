use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::DubbingRequest;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDubbingRequest {
    #[serde(default)]
    pub upload_id: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDubbingResponse {
    pub success: bool,
    pub dubbing_id: String,
    pub audio_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Runs one dubbing job inline. As with transcription, every failure is a
/// 500 `{error}` payload; the dubbing row carries the durable state.
#[tracing::instrument(skip(state, request))]
pub async fn create_dubbing_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateDubbingRequest>,
) -> impl IntoResponse {
    let request = DubbingRequest {
        upload_id: request.upload_id,
        target_language: request.target_language,
        voice_id: request.voice_id,
    };

    match state.dubbing_service.create_dubbing(request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(CreateDubbingResponse {
                success: true,
                dubbing_id: outcome.dubbing_id.as_uuid().to_string(),
                audio_url: outcome.audio_url,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Dubbing job failed");
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
