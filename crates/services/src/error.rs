//! Shared error types for the services crate.

use thiserror::Error;

use spell_core::model::WordBankError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Failures while writing or reading persisted quiz state.
///
/// The quiz service logs these; they never abort a state transition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistenceError {
    #[error(transparent)]
    Codec(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    WordBank(#[from] WordBankError),
}
