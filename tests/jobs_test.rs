use std::sync::Arc;
use std::time::Duration;

use redub::application::ports::{DubbingRepository, UploadRepository};
use redub::application::services::{
    DubbingRequest, DubbingService, PollSettings, StatusPoller, TranscribeRequest,
    TranscriptionService, UploadService, UploadError,
};
use redub::domain::{AudioUpload, DubbingStatus, UploadStatus};
use redub::infrastructure::audio::{MockAudioSource, MockTranscriptionEngine};
use redub::infrastructure::llm::MockTranslator;
use redub::infrastructure::persistence::{MemoryDubbingRepository, MemoryUploadRepository};
use redub::infrastructure::storage::MockAudioStore;
use redub::infrastructure::synthesis::MockSpeechSynthesizer;

fn seed_upload(uploads: &MemoryUploadRepository, transcription: Option<&str>) -> AudioUpload {
    let mut upload = AudioUpload::new(
        "call.mp3".to_string(),
        "https://store/originals/call.mp3".to_string(),
        Some(1024),
    );
    if let Some(text) = transcription {
        upload.transcription_text = Some(text.to_string());
        upload.status = UploadStatus::Completed;
    }
    uploads.insert(upload.clone());
    upload
}

fn dubbing_request(upload: &AudioUpload, language: &str) -> DubbingRequest {
    DubbingRequest {
        upload_id: Some(upload.id.as_uuid().to_string()),
        target_language: Some(language.to_string()),
        voice_id: Some("v1".to_string()),
    }
}

struct DubbingFixture {
    uploads: Arc<MemoryUploadRepository>,
    dubbings: Arc<MemoryDubbingRepository>,
    translator: Arc<MockTranslator>,
    synthesizer: Arc<MockSpeechSynthesizer>,
    service: DubbingService,
}

fn dubbing_fixture(
    translator: MockTranslator,
    synthesizer: MockSpeechSynthesizer,
) -> DubbingFixture {
    let uploads = Arc::new(MemoryUploadRepository::new());
    let dubbings = Arc::new(MemoryDubbingRepository::new());
    let translator = Arc::new(translator);
    let synthesizer = Arc::new(synthesizer);
    let store: Arc<MockAudioStore> = Arc::new(MockAudioStore::new());

    let uploads_dyn: Arc<dyn UploadRepository> = uploads.clone();
    let dubbings_dyn: Arc<dyn DubbingRepository> = dubbings.clone();

    let service = DubbingService::new(
        uploads_dyn,
        dubbings_dyn,
        translator.clone(),
        synthesizer.clone(),
        store,
    );

    DubbingFixture {
        uploads,
        dubbings,
        translator,
        synthesizer,
        service,
    }
}

#[tokio::test]
async fn given_english_target_when_dubbing_then_translator_is_never_called() {
    let fixture = dubbing_fixture(
        MockTranslator::returning("should not be used"),
        MockSpeechSynthesizer::returning(b"audio"),
    );
    let upload = seed_upload(&fixture.uploads, Some("Hello team"));

    let outcome = fixture
        .service
        .create_dubbing(dubbing_request(&upload, "en"))
        .await
        .expect("dubbing should succeed");

    assert_eq!(fixture.translator.call_count(), 0);
    assert_eq!(fixture.synthesizer.last_text().as_deref(), Some("Hello team"));
    assert!(outcome.audio_url.contains("/dubbed/"));
}

#[tokio::test]
async fn given_translation_failure_when_dubbing_then_original_text_is_spoken() {
    let fixture = dubbing_fixture(
        MockTranslator::failing("rate limited"),
        MockSpeechSynthesizer::returning(b"audio"),
    );
    let upload = seed_upload(&fixture.uploads, Some("Hello team"));

    let outcome = fixture
        .service
        .create_dubbing(dubbing_request(&upload, "es"))
        .await
        .expect("translation failure must not fail the dubbing");

    assert_eq!(fixture.translator.call_count(), 1);
    assert_eq!(fixture.synthesizer.last_text().as_deref(), Some("Hello team"));

    let rows = fixture.dubbings.list_for_upload(upload.id).await.unwrap();
    assert_eq!(rows[0].status, DubbingStatus::Completed);
    assert_eq!(rows[0].dubbed_audio_url.as_deref(), Some(outcome.audio_url.as_str()));
}

#[tokio::test]
async fn given_synthesis_failure_when_dubbing_then_row_is_marked_failed() {
    let fixture = dubbing_fixture(
        MockTranslator::returning("Hola equipo"),
        MockSpeechSynthesizer::failing("voice unavailable"),
    );
    let upload = seed_upload(&fixture.uploads, Some("Hello team"));

    let result = fixture
        .service
        .create_dubbing(dubbing_request(&upload, "es"))
        .await;

    assert!(result.is_err());

    let rows = fixture.dubbings.list_for_upload(upload.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, DubbingStatus::Failed);
    assert!(rows[0].dubbed_audio_url.is_none());
}

#[tokio::test]
async fn given_identical_requests_when_dubbing_twice_then_two_independent_rows_exist() {
    let fixture = dubbing_fixture(
        MockTranslator::returning("Hola equipo"),
        MockSpeechSynthesizer::returning(b"audio"),
    );
    let upload = seed_upload(&fixture.uploads, Some("Hello team"));

    let first = fixture
        .service
        .create_dubbing(dubbing_request(&upload, "es"))
        .await
        .unwrap();
    let second = fixture
        .service
        .create_dubbing(dubbing_request(&upload, "es"))
        .await
        .unwrap();

    assert_ne!(first.dubbing_id, second.dubbing_id);
    assert_eq!(fixture.dubbings.count(), 2);
}

#[tokio::test]
async fn given_missing_voice_id_when_dubbing_then_fails_validation_without_row() {
    let fixture = dubbing_fixture(
        MockTranslator::returning("Hola"),
        MockSpeechSynthesizer::returning(b"audio"),
    );
    let upload = seed_upload(&fixture.uploads, Some("Hello team"));

    let request = DubbingRequest {
        voice_id: None,
        ..dubbing_request(&upload, "es")
    };
    let error = fixture.service.create_dubbing(request).await.unwrap_err();

    assert!(error.is_validation());
    assert_eq!(fixture.dubbings.count(), 0);
}

#[tokio::test]
async fn given_engine_failure_when_transcribing_then_row_is_marked_failed() {
    let uploads = Arc::new(MemoryUploadRepository::new());
    let uploads_dyn: Arc<dyn UploadRepository> = uploads.clone();
    let upload = seed_upload(&uploads, None);

    let service = TranscriptionService::new(
        Arc::new(MockAudioSource::returning(b"audio")),
        Arc::new(MockTranscriptionEngine::failing("model overloaded")),
        uploads_dyn,
    );

    let result = service
        .transcribe_upload(TranscribeRequest {
            upload_id: Some(upload.id.as_uuid().to_string()),
            audio_url: Some("https://store/originals/call.mp3".to_string()),
        })
        .await;

    assert!(result.is_err());
    let row = uploads.get_by_id(upload.id).await.unwrap().unwrap();
    assert_eq!(row.status, UploadStatus::Failed);
    assert!(row.transcription_text.is_none());
}

#[tokio::test]
async fn given_blank_inputs_when_transcribing_then_fails_validation() {
    let uploads = Arc::new(MemoryUploadRepository::new());
    let uploads_dyn: Arc<dyn UploadRepository> = uploads.clone();

    let service = TranscriptionService::new(
        Arc::new(MockAudioSource::returning(b"audio")),
        Arc::new(MockTranscriptionEngine::returning("text")),
        uploads_dyn,
    );

    let error = service
        .transcribe_upload(TranscribeRequest {
            upload_id: Some("  ".to_string()),
            audio_url: Some("https://store/call.mp3".to_string()),
        })
        .await
        .unwrap_err();

    assert!(error.is_validation());
}

#[tokio::test]
async fn given_unsupported_content_type_when_storing_upload_then_rejected_before_any_write() {
    let uploads = Arc::new(MemoryUploadRepository::new());
    let dubbings = Arc::new(MemoryDubbingRepository::new());
    let store = Arc::new(MockAudioStore::new());
    let uploads_dyn: Arc<dyn UploadRepository> = uploads.clone();
    let dubbings_dyn: Arc<dyn DubbingRepository> = dubbings.clone();

    let service = UploadService::new(uploads_dyn, dubbings_dyn, store.clone(), 25);

    let error = service
        .store_upload("notes.txt", "text/plain", bytes::Bytes::from_static(b"x"))
        .await
        .unwrap_err();

    assert!(matches!(error, UploadError::UnsupportedContentType(_)));
    assert_eq!(store.blob_count(), 0);
    assert_eq!(uploads.list_recent(10).await.unwrap().len(), 0);
}

#[tokio::test]
async fn given_transient_upload_when_polling_then_returns_first_terminal_state() {
    let uploads = Arc::new(MemoryUploadRepository::new());
    let dubbings = Arc::new(MemoryDubbingRepository::new());
    let uploads_dyn: Arc<dyn UploadRepository> = uploads.clone();
    let dubbings_dyn: Arc<dyn DubbingRepository> = dubbings.clone();

    let upload = seed_upload(&uploads, None);

    let poller = StatusPoller::new(
        uploads_dyn.clone(),
        dubbings_dyn,
        PollSettings {
            upload_interval: Duration::from_millis(10),
            dubbing_interval: Duration::from_millis(10),
            max_wait: Duration::from_secs(2),
        },
    );

    let writer = uploads_dyn.clone();
    let upload_id = upload.id;
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(40)).await;
        writer
            .set_transcription(upload_id, "Hello team")
            .await
            .unwrap();
    });

    let observed = poller
        .wait_for_upload(upload.id)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(observed.status, UploadStatus::Completed);
    assert_eq!(observed.transcription_text.as_deref(), Some("Hello team"));
}

#[tokio::test]
async fn given_stuck_upload_when_polling_then_budget_expires_with_latest_row() {
    let uploads = Arc::new(MemoryUploadRepository::new());
    let dubbings = Arc::new(MemoryDubbingRepository::new());
    let uploads_dyn: Arc<dyn UploadRepository> = uploads.clone();
    let dubbings_dyn: Arc<dyn DubbingRepository> = dubbings.clone();

    let upload = seed_upload(&uploads, None);

    let poller = StatusPoller::new(
        uploads_dyn,
        dubbings_dyn,
        PollSettings {
            upload_interval: Duration::from_millis(10),
            dubbing_interval: Duration::from_millis(10),
            max_wait: Duration::from_millis(50),
        },
    );

    let observed = poller
        .wait_for_upload(upload.id)
        .await
        .unwrap()
        .expect("row exists");

    // Nothing ever transitioned the row; the poller hands back the transient
    // state instead of waiting forever.
    assert_eq!(observed.status, UploadStatus::Transcribing);
}
