use std::sync::Arc;

use async_trait::async_trait;
use flash_core::model::{CardStore, StatsStore};
use storage::repository::{CardRepository, StatsRepository, StorageError};

use crate::store::{Change, StateObserver};

/// Writes the card list back to storage whenever it changes.
///
/// Cursor and filter moves leave the stored deck alone.
#[derive(Clone)]
pub struct CardPersister {
    cards: Arc<dyn CardRepository>,
}

impl CardPersister {
    #[must_use]
    pub fn new(cards: Arc<dyn CardRepository>) -> Self {
        Self { cards }
    }
}

#[async_trait]
impl StateObserver<CardStore> for CardPersister {
    async fn on_change(&self, change: Change<'_, CardStore>) -> Result<(), StorageError> {
        let unchanged = change
            .previous
            .is_some_and(|previous| previous.cards() == change.current.cards());
        if unchanged {
            return Ok(());
        }
        self.cards.save_cards(change.current.cards()).await
    }
}

/// Writes the stats map back to storage after every change.
#[derive(Clone)]
pub struct StatsPersister {
    stats: Arc<dyn StatsRepository>,
}

impl StatsPersister {
    #[must_use]
    pub fn new(stats: Arc<dyn StatsRepository>) -> Self {
        Self { stats }
    }
}

#[async_trait]
impl StateObserver<StatsStore> for StatsPersister {
    async fn on_change(&self, change: Change<'_, StatsStore>) -> Result<(), StorageError> {
        self.stats.save_stats(change.current).await
    }
}
