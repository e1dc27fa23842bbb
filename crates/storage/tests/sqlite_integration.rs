use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.load("spellingGameState").await.unwrap(), None);

    repo.save("spellingGameState", br#"{"currentQuestionIndex":0}"#)
        .await
        .unwrap();
    let loaded = repo.load("spellingGameState").await.unwrap();
    assert_eq!(loaded.as_deref(), Some(&br#"{"currentQuestionIndex":0}"#[..]));
}

#[tokio::test]
async fn sqlite_save_overwrites_and_remove_deletes() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save("spellingErrors", br#"["weird"]"#).await.unwrap();
    repo.save("spellingErrors", br#"["weird","rhythm"]"#)
        .await
        .unwrap();
    assert_eq!(
        repo.load("spellingErrors").await.unwrap().as_deref(),
        Some(&br#"["weird","rhythm"]"#[..])
    );

    repo.remove("spellingErrors").await.unwrap();
    assert_eq!(repo.load("spellingErrors").await.unwrap(), None);
    repo.remove("spellingErrors").await.expect("removing twice is fine");
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.save("k", b"v").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.load("k").await.unwrap().as_deref(), Some(&b"v"[..]));
}

#[tokio::test]
async fn storage_sqlite_exposes_store() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.save("k", b"v").await.unwrap();
    assert_eq!(storage.kv.load("k").await.unwrap().as_deref(), Some(&b"v"[..]));
}
