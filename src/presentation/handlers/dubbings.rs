use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::DubbingJobError;
use crate::domain::{Dubbing, DubbingId, UploadId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DubbingResponse {
    pub id: String,
    pub audio_upload_id: String,
    pub target_language: String,
    pub voice_id: String,
    pub dubbed_audio_url: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl From<Dubbing> for DubbingResponse {
    fn from(dubbing: Dubbing) -> Self {
        Self {
            id: dubbing.id.as_uuid().to_string(),
            audio_upload_id: dubbing.audio_upload_id.as_uuid().to_string(),
            target_language: dubbing.target_language.as_str().to_string(),
            voice_id: dubbing.voice_id,
            dubbed_audio_url: dubbing.dubbed_audio_url,
            status: dubbing.status.as_str().to_string(),
            created_at: dubbing.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_dubbings_handler(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> impl IntoResponse {
    let id = match Uuid::parse_str(&upload_id) {
        Ok(u) => UploadId::from_uuid(u),
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid upload ID: {}", upload_id),
                }),
            )
                .into_response();
        }
    };

    match state.dubbing_repository.list_for_upload(id).await {
        Ok(dubbings) => {
            let rows: Vec<DubbingResponse> = dubbings.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(rows)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list dubbings");
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

/// Deletes one dubbing and its blob; the parent upload is untouched.
#[tracing::instrument(skip(state))]
pub async fn delete_dubbing_handler(
    State(state): State<AppState>,
    Path(dubbing_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_dubbing_id(&dubbing_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.dubbing_service.delete_dubbing(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(DubbingJobError::Validation(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Dubbing not found: {}", dubbing_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete dubbing");
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

#[tracing::instrument(skip(state))]
pub async fn wait_dubbing_handler(
    State(state): State<AppState>,
    Path(dubbing_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_dubbing_id(&dubbing_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.status_poller.wait_for_dubbing(id).await {
        Ok(Some(dubbing)) => (StatusCode::OK, Json(DubbingResponse::from(dubbing))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Dubbing not found: {}", dubbing_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed while polling dubbing");
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

fn parse_dubbing_id(raw: &str) -> Result<DubbingId, axum::response::Response> {
    Uuid::parse_str(raw)
        .map(DubbingId::from_uuid)
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid dubbing ID: {}", raw),
                }),
            )
                .into_response()
        })
}
