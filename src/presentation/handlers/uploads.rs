use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::{TranscriptionMessage, UploadError};
use crate::domain::{AudioUpload, UploadId};
use crate::presentation::state::AppState;

const DEFAULT_LIST_LIMIT: i64 = 10;

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub filename: String,
    pub original_audio_url: String,
    pub transcription_text: Option<String>,
    pub status: String,
    pub file_size_bytes: Option<i64>,
    pub duration_seconds: Option<f64>,
    pub created_at: String,
}

impl From<AudioUpload> for UploadResponse {
    fn from(upload: AudioUpload) -> Self {
        Self {
            id: upload.id.as_uuid().to_string(),
            filename: upload.filename,
            original_audio_url: upload.original_audio_url,
            transcription_text: upload.transcription_text,
            status: upload.status.as_str().to_string(),
            file_size_bytes: upload.file_size_bytes,
            duration_seconds: upload.duration_seconds,
            created_at: upload.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// Multipart intake: stores the blob, inserts the row in `transcribing`
/// state, and enqueues the transcription job.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_audio_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, content_type = %content_type, bytes = data.len(), "File received");

    let upload = match state
        .upload_service
        .store_upload(&filename, &content_type, data)
        .await
    {
        Ok(upload) => upload,
        Err(e @ UploadError::UnsupportedContentType(_)) => {
            tracing::warn!(content_type = %content_type, "Unsupported content type");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
        Err(e @ UploadError::FileTooLarge { .. }) => {
            tracing::warn!("Oversized upload rejected");
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store upload");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let msg = TranscriptionMessage {
        upload_id: upload.id,
        audio_url: upload.original_audio_url.clone(),
    };

    if let Err(e) = state.transcription_sender.send(msg).await {
        tracing::error!(error = %e, "Failed to enqueue transcription job");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Transcription queue full or worker unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(
        upload_id = %upload.id.as_uuid(),
        filename = %upload.filename,
        "Upload accepted, transcription enqueued"
    );

    (StatusCode::ACCEPTED, Json(UploadResponse::from(upload))).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn get_upload_handler(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_upload_id(&upload_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.upload_repository.get_by_id(id).await {
        Ok(Some(upload)) => (StatusCode::OK, Json(UploadResponse::from(upload))).into_response(),
        Ok(None) => not_found(&upload_id),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch upload");
            internal_error(e.to_string())
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_uploads_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    match state.upload_repository.list_recent(limit).await {
        Ok(uploads) => {
            let rows: Vec<UploadResponse> = uploads.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(rows)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list uploads");
            internal_error(e.to_string())
        }
    }
}

/// Cascade delete: dubbing blobs and rows first, then the original blob and
/// the upload row.
#[tracing::instrument(skip(state))]
pub async fn delete_upload_handler(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_upload_id(&upload_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.upload_service.delete_upload(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(UploadError::NotFound(_)) => not_found(&upload_id),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete upload");
            internal_error(e.to_string())
        }
    }
}

/// Long-poll variant of the status read: returns once the row is terminal or
/// the poller's wait budget is spent.
#[tracing::instrument(skip(state))]
pub async fn wait_upload_handler(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_upload_id(&upload_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.status_poller.wait_for_upload(id).await {
        Ok(Some(upload)) => (StatusCode::OK, Json(UploadResponse::from(upload))).into_response(),
        Ok(None) => not_found(&upload_id),
        Err(e) => {
            tracing::error!(error = %e, "Failed while polling upload");
            internal_error(e.to_string())
        }
    }
}

fn parse_upload_id(raw: &str) -> Result<UploadId, axum::response::Response> {
    Uuid::parse_str(raw)
        .map(UploadId::from_uuid)
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid upload ID: {}", raw),
                }),
            )
                .into_response()
        })
}

fn not_found(id: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Upload not found: {}", id),
        }),
    )
        .into_response()
}

fn internal_error(error: String) -> axum::response::Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error })).into_response()
}
