use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::domain::Record;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListRecordsError {
    #[error("storage error: {0}")]
    StorageError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRecordError {
    /// Required field missing or empty; storage was never touched.
    #[error("{0}")]
    Validation(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateRecordError {
    #[error("{0}")]
    Validation(String),

    #[error("record not found")]
    NotFound,

    #[error("storage error: {0}")]
    StorageError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteRecordError {
    #[error("record not found")]
    NotFound,

    #[error("storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use cases (one set per resource kind, shared shape)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListRecordsUseCase<R: Record>: Send + Sync {
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError>;
}

#[async_trait]
pub trait CreateRecordUseCase<R: Record>: Send + Sync {
    async fn execute(&self, draft: R::Draft) -> Result<R, CreateRecordError>;
}

#[async_trait]
pub trait UpdateRecordUseCase<R: Record>: Send + Sync {
    async fn execute(&self, id: &str, draft: R::Draft) -> Result<R, UpdateRecordError>;
}

#[async_trait]
pub trait DeleteRecordUseCase<R: Record>: Send + Sync {
    async fn execute(&self, id: &str) -> Result<R, DeleteRecordError>;
}

/// The four verbs of one resource kind, bundled for `AppState`.
#[derive(Clone)]
pub struct CollectionUseCases<R: Record> {
    pub list: Arc<dyn ListRecordsUseCase<R>>,
    pub create: Arc<dyn CreateRecordUseCase<R>>,
    pub update: Arc<dyn UpdateRecordUseCase<R>>,
    pub delete: Arc<dyn DeleteRecordUseCase<R>>,
}

impl<R: Record> CollectionUseCases<R> {
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ListRecordsUseCase<R>
            + CreateRecordUseCase<R>
            + UpdateRecordUseCase<R>
            + DeleteRecordUseCase<R>
            + 'static,
    {
        Self {
            list: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}
