use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::content::application::domain::{Draft, Record};
use crate::modules::content::application::ports::incoming::{
    CreateRecordError, CreateRecordUseCase, DeleteRecordError, DeleteRecordUseCase,
    ListRecordsError, ListRecordsUseCase, UpdateRecordError, UpdateRecordUseCase,
};
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};
use crate::shared::id::new_record_id;

/// CRUD application service for one resource kind. Validation and defaulting
/// happen here, before the store is touched; the store decides durability.
pub struct CollectionService<R: Record> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Record> CollectionService<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<R: Record> ListRecordsUseCase<R> for CollectionService<R> {
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError> {
        self.store
            .list()
            .await
            .map_err(|e| ListRecordsError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl<R: Record> CreateRecordUseCase<R> for CollectionService<R> {
    async fn execute(&self, draft: R::Draft) -> Result<R, CreateRecordError> {
        draft
            .validate()
            .map_err(|e| CreateRecordError::Validation(e.to_string()))?;

        let record = R::create(new_record_id(), draft, Utc::now());

        self.store
            .insert(record)
            .await
            .map_err(|e| CreateRecordError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl<R: Record> UpdateRecordUseCase<R> for CollectionService<R> {
    async fn execute(&self, id: &str, draft: R::Draft) -> Result<R, UpdateRecordError> {
        draft
            .validate()
            .map_err(|e| UpdateRecordError::Validation(e.to_string()))?;

        self.store.update(id, draft).await.map_err(|e| match e {
            StoreError::NotFound => UpdateRecordError::NotFound,
            other => UpdateRecordError::StorageError(other.to_string()),
        })
    }
}

#[async_trait]
impl<R: Record> DeleteRecordUseCase<R> for CollectionService<R> {
    async fn execute(&self, id: &str) -> Result<R, DeleteRecordError> {
        self.store.delete(id).await.map_err(|e| match e {
            StoreError::NotFound => DeleteRecordError::NotFound,
            other => DeleteRecordError::StorageError(other.to_string()),
        })
    }
}
