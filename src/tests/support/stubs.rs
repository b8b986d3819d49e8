use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::application::domain::Record;
use crate::modules::content::application::ports::incoming::{
    CollectionUseCases, CreateRecordError, CreateRecordUseCase, DeleteRecordError,
    DeleteRecordUseCase, ListRecordsError, ListRecordsUseCase, UpdateRecordError,
    UpdateRecordUseCase,
};

/// Answers every verb of one resource kind. List returns an empty collection;
/// the mutating verbs fail loudly so a test that forgot to install its mock
/// is caught immediately.
pub struct StubCollectionService<R: Record>(PhantomData<R>);

impl<R: Record> StubCollectionService<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<R: Record> ListRecordsUseCase<R> for StubCollectionService<R> {
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl<R: Record> CreateRecordUseCase<R> for StubCollectionService<R> {
    async fn execute(&self, _draft: R::Draft) -> Result<R, CreateRecordError> {
        Err(CreateRecordError::StorageError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl<R: Record> UpdateRecordUseCase<R> for StubCollectionService<R> {
    async fn execute(&self, _id: &str, _draft: R::Draft) -> Result<R, UpdateRecordError> {
        Err(UpdateRecordError::StorageError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl<R: Record> DeleteRecordUseCase<R> for StubCollectionService<R> {
    async fn execute(&self, _id: &str) -> Result<R, DeleteRecordError> {
        Err(DeleteRecordError::StorageError(
            "not used in this test".to_string(),
        ))
    }
}

pub fn stub_collection<R: Record>() -> CollectionUseCases<R> {
    CollectionUseCases::from_service(Arc::new(StubCollectionService::new()))
}
