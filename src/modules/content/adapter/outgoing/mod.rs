pub mod fallback_store;
pub mod json_file_store;
pub mod postgres;
pub mod sea_orm_entity;

pub use fallback_store::FallbackStore;
pub use json_file_store::JsonFileStore;
