use flash_core::model::{Card, StatsAction, StatsKind, StatsStore, seed_cards};
use flash_core::{Reducer, StatsReducer};
use storage::repository::{
    CARDS_KEY, CardRepository, KeyValueRepository, STATS_KEY, StatsRepository, Storage,
    StorageError,
};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let repo = SqliteRepository::connect(&format!("sqlite:file:{name}?mode=memory&cache=shared"))
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_starts_empty() {
    let repo = connect("memdb_empty").await;
    assert!(repo.load_cards().await.unwrap().is_none());
    assert!(repo.load_stats().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_roundtrip_persists_cards_and_stats() {
    let repo = connect("memdb_roundtrip").await;

    let mut cards = seed_cards();
    cards.push(Card::new("2 + 3 = ?", "5", "Math"));
    repo.save_cards(&cards).await.unwrap();

    let stats = StatsReducer.reduce(
        &StatsStore::new(),
        StatsAction::new(StatsKind::Wrong, "2 + 3 = ?"),
    );
    repo.save_stats(&stats).await.unwrap();

    assert_eq!(repo.load_cards().await.unwrap(), Some(cards));
    assert_eq!(repo.load_stats().await.unwrap(), Some(stats));
}

#[tokio::test]
async fn sqlite_overwrites_previous_value() {
    let repo = connect("memdb_overwrite").await;
    repo.save_cards(&seed_cards()).await.unwrap();
    repo.save_cards(&[Card::new("only", "one", "Solo")]).await.unwrap();

    let loaded = repo.load_cards().await.unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].question(), "only");
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice").await;
    repo.put_value(STATS_KEY, "{}").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get_value(STATS_KEY).await.unwrap().as_deref(), Some("{}"));
}

#[tokio::test]
async fn sqlite_reports_corrupt_documents() {
    let repo = connect("memdb_corrupt").await;
    repo.put_value(CARDS_KEY, "not json").await.unwrap();
    assert!(matches!(
        repo.load_cards().await,
        Err(StorageError::Serialization(_))
    ));
}

#[tokio::test]
async fn storage_sqlite_builds_both_handles() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.cards.save_cards(&seed_cards()).await.unwrap();
    storage.stats.save_stats(&StatsStore::new()).await.unwrap();

    assert_eq!(storage.cards.load_cards().await.unwrap(), Some(seed_cards()));
    assert_eq!(
        storage.stats.load_stats().await.unwrap(),
        Some(StatsStore::new())
    );
}
