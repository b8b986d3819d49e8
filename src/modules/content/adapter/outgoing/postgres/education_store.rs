use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::map_db_err;
use crate::modules::content::adapter::outgoing::sea_orm_entity::education::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::{Education, EducationDraft};
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};

#[derive(Clone)]
pub struct EducationStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub fn to_active_model(record: &Education) -> ActiveModel {
    ActiveModel {
        id: Set(record.id.clone()),
        school: Set(record.school.clone()),
        degree: Set(record.degree.clone()),
        year: Set(record.year.clone()),
        description: Set(record.description.clone()),
        created_at: Set(record.created_at.fixed_offset()),
        updated_at: Set(record.updated_at.fixed_offset()),
    }
}

fn model_to_record(model: education::Model) -> Education {
    Education {
        id: model.id,
        school: model.school,
        degree: model.degree,
        year: model.year,
        description: model.description,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl RecordStore<Education> for EducationStorePostgres {
    async fn list(&self) -> Result<Vec<Education>, StoreError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn insert(&self, record: Education) -> Result<Education, StoreError> {
        let inserted = to_active_model(&record)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_record(inserted))
    }

    async fn update(&self, id: &str, draft: EducationDraft) -> Result<Education, StoreError> {
        // Omitted description stays NotSet so the row keeps its value.
        let mut changes = ActiveModel {
            school: Set(draft.school),
            degree: Set(draft.degree),
            year: Set(draft.year),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        if let Some(description) = draft.description {
            changes.description = Set(description);
        }

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = updated.into_iter().next().ok_or(StoreError::NotFound)?;
        Ok(model_to_record(model))
    }

    async fn delete(&self, id: &str) -> Result<Education, StoreError> {
        let existing = Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(StoreError::NotFound)?;

        Entity::delete_by_id(id.to_string())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_record(existing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_model(id: &str, school: &str) -> education::Model {
        let now = Utc::now().fixed_offset();

        education::Model {
            id: id.to_string(),
            school: school.to_string(),
            degree: "BSc Computer Science".to_string(),
            year: "2018-2022".to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_preserves_row_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_model("e-2", "Second School"),
                mock_model("e-1", "First School"),
            ]])
            .into_connection();

        let store = EducationStorePostgres::new(Arc::new(db));
        let records = store.list().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].school, "Second School");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<education::Model>::new()])
            .into_connection();

        let store = EducationStorePostgres::new(Arc::new(db));
        let result = store.update("missing", EducationDraft::default()).await;

        assert!(matches!(result.unwrap_err(), StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_returns_the_removed_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("e-1", "First School")]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = EducationStorePostgres::new(Arc::new(db));
        let record = store.delete("e-1").await.unwrap();

        assert_eq!(record.school, "First School");
    }
}
