use redub::application::ports::AudioStore;
use redub::domain::{DubbingId, StorageKey};
use redub::infrastructure::storage::ObjectAudioStore;

#[tokio::test]
async fn given_local_store_when_putting_blob_then_public_url_and_file_exist() {
    let dir = tempfile::tempdir().unwrap();
    let store = ObjectAudioStore::local(
        dir.path().to_path_buf(),
        "http://localhost:3000/audio-files/",
    )
    .unwrap();

    let key = StorageKey::from_raw("dubbed/test.mp3");
    let url = store
        .put(&key, bytes::Bytes::from_static(b"mp3 bytes"), "audio/mpeg")
        .await
        .unwrap();

    assert_eq!(url, "http://localhost:3000/audio-files/dubbed/test.mp3");
    let on_disk = dir.path().join("dubbed").join("test.mp3");
    assert_eq!(std::fs::read(on_disk).unwrap(), b"mp3 bytes");
}

#[tokio::test]
async fn given_stored_blob_when_deleting_by_url_then_file_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let store =
        ObjectAudioStore::local(dir.path().to_path_buf(), "http://localhost:3000/audio-files")
            .unwrap();

    let key = StorageKey::dubbed(&DubbingId::new());
    let url = store
        .put(&key, bytes::Bytes::from_static(b"mp3 bytes"), "audio/mpeg")
        .await
        .unwrap();

    store.delete(&url).await.unwrap();

    let on_disk = dir.path().join(key.as_str());
    assert!(!on_disk.exists());
}

#[tokio::test]
async fn given_foreign_url_when_deleting_then_store_ignores_it() {
    let dir = tempfile::tempdir().unwrap();
    let store =
        ObjectAudioStore::local(dir.path().to_path_buf(), "http://localhost:3000/audio-files")
            .unwrap();

    // URLs minted by another store must not be treated as local keys.
    store
        .delete("https://elsewhere.example/audio/x.mp3")
        .await
        .unwrap();
}
