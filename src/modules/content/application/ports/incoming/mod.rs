mod use_cases;

pub use use_cases::{
    CollectionUseCases, CreateRecordError, CreateRecordUseCase, DeleteRecordError,
    DeleteRecordUseCase, ListRecordsError, ListRecordsUseCase, UpdateRecordError,
    UpdateRecordUseCase,
};
