use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use redub::application::ports::{
    AudioSource, SpeechSynthesizer, TranscriptionEngine, Translator,
};
use redub::domain::LanguageCode;
use redub::infrastructure::audio::{HttpAudioSource, OpenAiWhisperEngine};
use redub::infrastructure::llm::OpenAiTranslator;
use redub::infrastructure::synthesis::ElevenLabsSynthesizer;

async fn start_mock_server(
    route: &'static str,
    method_post: bool,
    response_status: u16,
    response_body: &'static [u8],
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handler = move || async move {
        let status = axum::http::StatusCode::from_u16(response_status).unwrap();
        (status, response_body).into_response()
    };

    let app = if method_post {
        Router::new().route(route, post(handler))
    } else {
        Router::new().route(route, get(handler))
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_valid_audio_when_whisper_transcribes_then_returns_text() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/audio/transcriptions",
        true,
        200,
        br#"{"text": "Hello from Whisper"}"#,
    )
    .await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(b"fake audio bytes").await;

    assert_eq!(result.unwrap(), "Hello from Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_whisper_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/audio/transcriptions",
        true,
        400,
        br#"{"error": {"message": "bad audio"}}"#,
    )
    .await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(b"bad audio").await;

    assert!(matches!(
        result,
        Err(redub::application::ports::TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_chat_completion_when_translating_then_returns_first_choice() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/chat/completions",
        true,
        200,
        br#"{"choices": [{"message": {"content": "Hola equipo"}}]}"#,
    )
    .await;

    let translator = OpenAiTranslator::new("test-key".to_string(), Some(base_url), None);
    let result = translator
        .translate("Hello team", &LanguageCode::new("es"))
        .await;

    assert_eq!(result.unwrap(), "Hola equipo");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_translating_then_returns_invalid_response() {
    let (base_url, shutdown_tx) =
        start_mock_server("/chat/completions", true, 200, br#"{"choices": []}"#).await;

    let translator = OpenAiTranslator::new("test-key".to_string(), Some(base_url), None);
    let result = translator
        .translate("Hello team", &LanguageCode::new("es"))
        .await;

    assert!(matches!(
        result,
        Err(redub::application::ports::TranslationError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_translator_error_status_when_translating_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_mock_server("/chat/completions", true, 500, b"upstream down").await;

    let translator = OpenAiTranslator::new("test-key".to_string(), Some(base_url), None);
    let result = translator
        .translate("Hello team", &LanguageCode::new("fr"))
        .await;

    assert!(matches!(
        result,
        Err(redub::application::ports::TranslationError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_voice_when_synthesizing_then_returns_audio_bytes() {
    let (base_url, shutdown_tx) =
        start_mock_server("/v1/text-to-speech/{voice_id}", true, 200, b"mp3 bytes").await;

    let synthesizer = ElevenLabsSynthesizer::new("test-key".to_string(), Some(base_url), None);
    let result = synthesizer.synthesize("Hola equipo", "v1").await;

    assert_eq!(&result.unwrap()[..], b"mp3 bytes");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_synthesis_error_status_when_synthesizing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/v1/text-to-speech/{voice_id}",
        true,
        401,
        br#"{"detail": "invalid api key"}"#,
    )
    .await;

    let synthesizer = ElevenLabsSynthesizer::new("test-key".to_string(), Some(base_url), None);
    let result = synthesizer.synthesize("Hola equipo", "v1").await;

    assert!(matches!(
        result,
        Err(redub::application::ports::SynthesisError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_public_url_when_fetching_audio_then_returns_bytes() {
    let (base_url, shutdown_tx) =
        start_mock_server("/originals/call.mp3", false, 200, b"original audio").await;

    let source = HttpAudioSource::new();
    let result = source.fetch(&format!("{}/originals/call.mp3", base_url)).await;

    assert_eq!(result.unwrap(), b"original audio");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_blob_when_fetching_audio_then_returns_download_error() {
    let (base_url, shutdown_tx) =
        start_mock_server("/originals/call.mp3", false, 404, b"not found").await;

    let source = HttpAudioSource::new();
    let result = source.fetch(&format!("{}/originals/call.mp3", base_url)).await;

    assert!(matches!(
        result,
        Err(redub::application::ports::AudioSourceError::DownloadFailed(_))
    ));
    shutdown_tx.send(()).ok();
}
