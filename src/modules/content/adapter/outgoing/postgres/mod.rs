mod education_store;
mod experience_store;
mod probe;
mod project_store;

pub use education_store::{to_active_model as education_active_model, EducationStorePostgres};
pub use experience_store::{to_active_model as experience_active_model, ExperienceStorePostgres};
pub use probe::PostgresProbe;
pub use project_store::{to_active_model as project_active_model, ProjectStorePostgres};

use sea_orm::DbErr;

use crate::modules::content::application::ports::outgoing::StoreError;

pub(crate) fn map_db_err(e: DbErr) -> StoreError {
    StoreError::Database(e.to_string())
}
