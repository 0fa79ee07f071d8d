use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::cors::cors_middleware;
use crate::presentation::handlers::{
    create_dubbing_handler, delete_dubbing_handler, delete_upload_handler, get_upload_handler,
    health_handler, languages_handler, list_dubbings_handler, list_uploads_handler,
    transcribe_audio_handler, upload_audio_handler, wait_dubbing_handler, wait_upload_handler,
};
use crate::presentation::state::AppState;

/// Uploads are capped at 25 MB by the intake validation; the transport limit
/// sits above that so the cap is enforced with a JSON error, not a connection
/// reset.
const BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/transcribe-audio", post(transcribe_audio_handler))
        .route("/api/v1/create-dubbing", post(create_dubbing_handler))
        .route(
            "/api/v1/uploads",
            post(upload_audio_handler).get(list_uploads_handler),
        )
        .route(
            "/api/v1/uploads/{upload_id}",
            get(get_upload_handler).delete(delete_upload_handler),
        )
        .route("/api/v1/uploads/{upload_id}/wait", get(wait_upload_handler))
        .route(
            "/api/v1/uploads/{upload_id}/dubbings",
            get(list_dubbings_handler),
        )
        .route(
            "/api/v1/dubbings/{dubbing_id}",
            delete(delete_dubbing_handler),
        )
        .route(
            "/api/v1/dubbings/{dubbing_id}/wait",
            get(wait_dubbing_handler),
        )
        .route("/api/v1/languages", get(languages_handler))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}
