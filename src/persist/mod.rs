//! Persistence abstraction: an opaque fixed-key document store.

/// In-memory sink for tests and ephemeral sessions.
pub mod memory;
/// SQLite-backed sink.
pub mod sqlite;

use thiserror::Error;

/// Key under which the serialized record collection is stored.
pub const STATE_KEY: &str = "vehicles";

/// Failure surfaced by a sink. Never swallowed by callers.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Document (de)serialization failure.
    #[error("state document error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Failure reported by a custom sink implementation.
    #[error("{0}")]
    Message(String),
}

/// Result alias for sink operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Opaque key-value collaborator holding the whole record collection as one
/// serialized document under [`STATE_KEY`].
///
/// Every successful mutation rewrites the document wholesale; there are no
/// incremental writes. An absent document means empty initial state, not an
/// error.
pub trait StateSink {
    /// Reads the current document, or `None` when nothing was ever saved.
    fn load_state(&self) -> PersistResult<Option<String>>;
    /// Replaces the document.
    fn save_state(&mut self, payload: &str) -> PersistResult<()>;
}
