//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by sessions while dispatching actions.
///
/// A failed observer never rolls back the transition; the new state is kept.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("failed to persist state: {0}")]
    Persist(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
