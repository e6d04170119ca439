use async_trait::async_trait;
use flash_core::model::{Card, StatsStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Storage key holding the card list.
pub const CARDS_KEY: &str = "cards";
/// Storage key holding the stats map.
pub const STATS_KEY: &str = "stats";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a card.
///
/// Kept separate from the domain `Card` so the stored document layout can stay
/// stable while the domain type evolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub question: String,
    pub answer: String,
    pub subject: String,
}

impl CardRecord {
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            question: card.question().to_owned(),
            answer: card.answer().to_owned(),
            subject: card.subject().to_owned(),
        }
    }

    #[must_use]
    pub fn into_card(self) -> Card {
        Card::new(self.question, self.answer, self.subject)
    }
}

/// Opaque string-valued key-value storage, the primitive every backend provides.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load/save capability for the card list.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Load the stored deck. `Ok(None)` means nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the document is corrupt.
    async fn load_cards(&self) -> Result<Option<Vec<Card>>, StorageError>;

    /// Replace the stored deck.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the deck cannot be stored.
    async fn save_cards(&self, cards: &[Card]) -> Result<(), StorageError>;
}

/// Load/save capability for the stats map.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Load stored stats. `Ok(None)` means nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the document is corrupt.
    async fn load_stats(&self) -> Result<Option<StatsStore>, StorageError>;

    /// Replace stored stats.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stats cannot be stored.
    async fn save_stats(&self, stats: &StatsStore) -> Result<(), StorageError>;
}

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

#[async_trait]
impl<T: KeyValueRepository + ?Sized> CardRepository for T {
    async fn load_cards(&self) -> Result<Option<Vec<Card>>, StorageError> {
        let Some(raw) = self.get_value(CARDS_KEY).await? else {
            return Ok(None);
        };
        let records: Vec<CardRecord> = serde_json::from_str(&raw).map_err(ser)?;
        Ok(Some(records.into_iter().map(CardRecord::into_card).collect()))
    }

    async fn save_cards(&self, cards: &[Card]) -> Result<(), StorageError> {
        let records: Vec<CardRecord> = cards.iter().map(CardRecord::from_card).collect();
        let raw = serde_json::to_string(&records).map_err(ser)?;
        self.put_value(CARDS_KEY, &raw).await?;
        tracing::debug!(cards = cards.len(), "saved cards");
        Ok(())
    }
}

#[async_trait]
impl<T: KeyValueRepository + ?Sized> StatsRepository for T {
    async fn load_stats(&self) -> Result<Option<StatsStore>, StorageError> {
        let Some(raw) = self.get_value(STATS_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(ser)
    }

    async fn save_stats(&self, stats: &StatsStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(stats).map_err(ser)?;
        self.put_value(STATS_KEY, &raw).await?;
        tracing::debug!(questions = stats.len(), "saved stats");
        Ok(())
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Aggregates card and stats repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub cards: Arc<dyn CardRepository>,
    pub stats: Arc<dyn StatsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_key_value(InMemoryRepository::new())
    }

    /// Serve both slices from one key-value backend.
    #[must_use]
    pub fn from_key_value<R>(repo: R) -> Self
    where
        R: KeyValueRepository + Clone + 'static,
    {
        let cards: Arc<dyn CardRepository> = Arc::new(repo.clone());
        let stats: Arc<dyn StatsRepository> = Arc::new(repo);
        Self { cards, stats }
    }
}
