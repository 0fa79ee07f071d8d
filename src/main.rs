use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use redub::application::ports::{
    AudioSource, DubbingRepository, SpeechSynthesizer, TranscriptionEngine, Translator,
    UploadRepository,
};
use redub::application::services::{
    DubbingService, PollSettings, StatusPoller, TranscriptionService, TranscriptionWorker,
    UploadService,
};
use redub::infrastructure::audio::{HttpAudioSource, OpenAiWhisperEngine};
use redub::infrastructure::llm::OpenAiTranslator;
use redub::infrastructure::observability::{init_tracing, TracingConfig};
use redub::infrastructure::persistence::{create_pool, PgDubbingRepository, PgUploadRepository};
use redub::infrastructure::storage::build_audio_store;
use redub::infrastructure::synthesis::ElevenLabsSynthesizer;
use redub::presentation::{create_router, AppState, Settings};

const TRANSCRIPTION_QUEUE_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    init_tracing(
        TracingConfig {
            json_format: settings.logging.enable_json,
            level: settings.logging.level.clone(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    sqlx::migrate!().run(&pool).await?;

    let upload_repository: Arc<dyn UploadRepository> =
        Arc::new(PgUploadRepository::new(pool.clone()));
    let dubbing_repository: Arc<dyn DubbingRepository> =
        Arc::new(PgDubbingRepository::new(pool.clone()));

    let audio_store = build_audio_store(&settings.storage)
        .map_err(|e| anyhow::anyhow!("Failed to build audio store: {}", e))?;

    let audio_source: Arc<dyn AudioSource> = Arc::new(HttpAudioSource::new());
    let transcription_engine: Arc<dyn TranscriptionEngine> = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.transcription_model.clone(),
    ));
    let translator: Arc<dyn Translator> = Arc::new(OpenAiTranslator::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.translation_model.clone(),
    ));
    let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(ElevenLabsSynthesizer::new(
        settings.elevenlabs.api_key.clone(),
        settings.elevenlabs.base_url.clone(),
        settings.elevenlabs.model_id.clone(),
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::clone(&audio_source),
        Arc::clone(&transcription_engine),
        Arc::clone(&upload_repository),
    ));

    let dubbing_service = Arc::new(DubbingService::new(
        Arc::clone(&upload_repository),
        Arc::clone(&dubbing_repository),
        Arc::clone(&translator),
        Arc::clone(&synthesizer),
        Arc::clone(&audio_store),
    ));

    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&upload_repository),
        Arc::clone(&dubbing_repository),
        Arc::clone(&audio_store),
        settings.upload.max_file_size_mb,
    ));

    let status_poller = Arc::new(StatusPoller::new(
        Arc::clone(&upload_repository),
        Arc::clone(&dubbing_repository),
        PollSettings {
            upload_interval: Duration::from_millis(settings.polling.upload_interval_ms),
            dubbing_interval: Duration::from_millis(settings.polling.dubbing_interval_ms),
            max_wait: Duration::from_millis(settings.polling.max_wait_ms),
        },
    ));

    let (transcription_sender, transcription_receiver) =
        mpsc::channel(TRANSCRIPTION_QUEUE_CAPACITY);
    let worker = TranscriptionWorker::new(
        transcription_receiver,
        Arc::clone(&transcription_service),
    );
    tokio::spawn(worker.run());

    let state = AppState {
        transcription_service,
        dubbing_service,
        upload_service,
        status_poller,
        upload_repository,
        dubbing_repository,
        transcription_sender,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
