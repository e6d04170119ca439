use std::sync::Arc;

use flash_core::model::{CardAction, CardStore};
use flash_core::{CardReducer, ProducerRegistry};
use storage::repository::CardRepository;

use crate::error::SessionError;
use crate::persistence::CardPersister;
use crate::store::Store;

/// Owns the card store for the lifetime of the app.
pub struct CardSession {
    store: Store<CardReducer>,
}

impl CardSession {
    /// Load the stored deck and mount the session.
    ///
    /// A missing, empty, or unreadable deck is replaced by the seed deck.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the initial deck cannot be written back.
    pub async fn open(
        cards: Arc<dyn CardRepository>,
        producers: ProducerRegistry,
    ) -> Result<Self, SessionError> {
        let initial = match cards.load_cards().await {
            Ok(Some(loaded)) if !loaded.is_empty() => CardStore::new(loaded),
            Ok(_) => {
                tracing::info!("no stored cards, using seed deck");
                CardStore::seeded()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load cards, using seed deck");
                CardStore::seeded()
            }
        };

        let store = Store::new(CardReducer::new(producers), initial)
            .with_observer(Arc::new(CardPersister::new(cards)));
        store.mount().await?;
        Ok(Self { store })
    }

    /// Apply `action` and persist the deck if it changed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the deck could not be saved; the new state is
    /// kept regardless.
    pub async fn dispatch(&self, action: CardAction) -> Result<CardStore, SessionError> {
        tracing::debug!(action = action.name(), "card action");
        self.store.dispatch(action).await
    }

    pub async fn snapshot(&self) -> CardStore {
        self.store.snapshot().await
    }

    #[must_use]
    pub fn producers(&self) -> &ProducerRegistry {
        self.store.reducer().producers()
    }
}
