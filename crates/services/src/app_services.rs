use std::sync::Arc;

use flash_core::ProducerRegistry;
use flash_core::model::{StatsStore, seed_cards};
use storage::repository::{CardRepository, StatsRepository, Storage};

use crate::error::AppServicesError;
use crate::producers::default_producers;
use crate::sessions::{CardSession, StatsSession, StudyService};

/// Assembles the card and stats sessions shared by the UI.
#[derive(Clone)]
pub struct AppServices {
    cards: Arc<CardSession>,
    stats: Arc<StatsSession>,
    study: StudyService,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the initial save fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, default_producers()).await
    }

    /// Build services over in-memory storage with the built-in producers.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the sessions cannot be mounted.
    pub async fn in_memory() -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), default_producers()).await
    }

    /// Open both sessions over `storage`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the sessions cannot be mounted.
    pub async fn from_storage(
        storage: &Storage,
        producers: ProducerRegistry,
    ) -> Result<Self, AppServicesError> {
        let cards = Arc::new(CardSession::open(Arc::clone(&storage.cards), producers).await?);
        let stats = Arc::new(StatsSession::open(Arc::clone(&storage.stats)).await?);
        let study = StudyService::new(Arc::clone(&cards), Arc::clone(&stats));

        tracing::info!("app services ready");
        Ok(Self {
            cards,
            stats,
            study,
        })
    }

    #[must_use]
    pub fn cards(&self) -> Arc<CardSession> {
        Arc::clone(&self.cards)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsSession> {
        Arc::clone(&self.stats)
    }

    #[must_use]
    pub fn study(&self) -> StudyService {
        self.study.clone()
    }
}

/// Overwrite stored cards with the seed deck and clear all stats.
///
/// # Errors
///
/// Returns `AppServicesError` if either write fails.
pub async fn seed_storage(storage: &Storage) -> Result<(), AppServicesError> {
    let cards = seed_cards();
    storage.cards.save_cards(&cards).await?;
    storage.stats.save_stats(&StatsStore::new()).await?;
    tracing::info!(cards = cards.len(), "seeded storage");
    Ok(())
}
