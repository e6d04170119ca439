use std::sync::Arc;

use async_trait::async_trait;
use flash_core::Reducer;
use storage::repository::StorageError;
use tokio::sync::Mutex;

use crate::error::SessionError;

/// A state transition handed to observers.
///
/// `previous` is `None` for the mount notification sent once at startup.
#[derive(Debug)]
pub struct Change<'a, S> {
    pub previous: Option<&'a S>,
    pub current: &'a S,
}

/// Side effect run after every committed transition.
#[async_trait]
pub trait StateObserver<S: Sync>: Send + Sync {
    /// React to a change.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the side effect could not be completed.
    async fn on_change(&self, change: Change<'_, S>) -> Result<(), StorageError>;
}

/// Single owner of a reducer-managed state value.
///
/// `dispatch` holds the state lock across the reducer call and every observer,
/// so effects complete in transition order before the next action is applied.
pub struct Store<R: Reducer> {
    reducer: R,
    state: Mutex<R::State>,
    observers: Vec<Arc<dyn StateObserver<R::State>>>,
}

impl<R: Reducer> Store<R> {
    #[must_use]
    pub fn new(reducer: R, initial: R::State) -> Self {
        Self {
            reducer,
            state: Mutex::new(initial),
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers can only be added before the store is shared.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn StateObserver<R::State>>) -> Self {
        self.observers.push(observer);
        self
    }

    #[must_use]
    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Clone of the current state.
    pub async fn snapshot(&self) -> R::State {
        self.state.lock().await.clone()
    }

    /// Notify observers of the initial state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if an observer fails.
    pub async fn mount(&self) -> Result<R::State, SessionError> {
        let state = self.state.lock().await;
        self.notify(Change {
            previous: None,
            current: &*state,
        })
        .await?;
        Ok(state.clone())
    }

    /// Apply `action` and run observers if the state changed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if an observer fails. The transition itself is
    /// kept either way.
    pub async fn dispatch(&self, action: R::Action) -> Result<R::State, SessionError> {
        let mut state = self.state.lock().await;
        let next = self.reducer.reduce(&state, action);
        if next == *state {
            return Ok(next);
        }

        let previous = std::mem::replace(&mut *state, next);
        self.notify(Change {
            previous: Some(&previous),
            current: &*state,
        })
        .await?;
        Ok(state.clone())
    }

    async fn notify(&self, change: Change<'_, R::State>) -> Result<(), SessionError> {
        let mut first_error = None;
        for observer in &self.observers {
            let change = Change {
                previous: change.previous,
                current: change.current,
            };
            if let Err(err) = observer.on_change(change).await {
                tracing::warn!(error = %err, "state observer failed");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(SessionError::Persist(err)),
            None => Ok(()),
        }
    }
}
