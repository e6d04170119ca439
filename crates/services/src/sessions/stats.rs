use std::sync::Arc;

use flash_core::StatsReducer;
use flash_core::model::{StatsAction, StatsStore};
use storage::repository::StatsRepository;

use crate::error::SessionError;
use crate::persistence::StatsPersister;
use crate::store::Store;

/// Owns the per-question answer statistics.
pub struct StatsSession {
    store: Store<StatsReducer>,
}

impl StatsSession {
    /// Load stored stats and mount the session. Unreadable stats start empty.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the initial stats cannot be written back.
    pub async fn open(stats: Arc<dyn StatsRepository>) -> Result<Self, SessionError> {
        let initial = match stats.load_stats().await {
            Ok(Some(loaded)) => loaded,
            Ok(None) => StatsStore::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stats, starting empty");
                StatsStore::new()
            }
        };

        let store =
            Store::new(StatsReducer, initial).with_observer(Arc::new(StatsPersister::new(stats)));
        store.mount().await?;
        Ok(Self { store })
    }

    /// Record one answer outcome.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the stats could not be saved.
    pub async fn dispatch(&self, action: StatsAction) -> Result<StatsStore, SessionError> {
        tracing::debug!(?action, "stats action");
        self.store.dispatch(action).await
    }

    pub async fn snapshot(&self) -> StatsStore {
        self.store.snapshot().await
    }
}
