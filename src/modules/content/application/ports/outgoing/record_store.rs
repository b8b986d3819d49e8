use async_trait::async_trait;

use crate::modules::content::application::domain::Record;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id in the active backend.
    #[error("record not found")]
    NotFound,

    #[error("storage I/O error: {0}")]
    Io(String),

    #[error("malformed collection document: {0}")]
    Serialization(String),

    #[error("database error: {0}")]
    Database(String),
}

/// Durable storage of one resource kind's collection. Implemented once per
/// backend: the JSON document store, the Postgres store, and the fallback
/// store that picks between them per call.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Full collection, newest first.
    async fn list(&self) -> Result<Vec<R>, StoreError>;

    /// Persists a fully-built record. The caller has already minted the id
    /// and set both timestamps.
    async fn insert(&self, record: R) -> Result<R, StoreError>;

    /// Replaces the mutable fields of the record with `id`, preserving `id`
    /// and `createdAt` and bumping `updatedAt`.
    async fn update(&self, id: &str, draft: R::Draft) -> Result<R, StoreError>;

    /// Removes and returns the record with `id`.
    async fn delete(&self, id: &str) -> Result<R, StoreError>;
}
