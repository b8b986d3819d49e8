use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::map_db_err;
use crate::modules::content::adapter::outgoing::sea_orm_entity::experience::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::{Experience, ExperienceDraft};
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};

#[derive(Clone)]
pub struct ExperienceStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub fn to_active_model(record: &Experience) -> ActiveModel {
    ActiveModel {
        id: Set(record.id.clone()),
        company: Set(record.company.clone()),
        role: Set(record.role.clone()),
        year: Set(record.year.clone()),
        description: Set(record.description.clone()),
        created_at: Set(record.created_at.fixed_offset()),
        updated_at: Set(record.updated_at.fixed_offset()),
    }
}

fn model_to_record(model: experience::Model) -> Experience {
    Experience {
        id: model.id,
        company: model.company,
        role: model.role,
        year: model.year,
        description: model.description,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl RecordStore<Experience> for ExperienceStorePostgres {
    async fn list(&self) -> Result<Vec<Experience>, StoreError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn insert(&self, record: Experience) -> Result<Experience, StoreError> {
        let inserted = to_active_model(&record)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_record(inserted))
    }

    async fn update(&self, id: &str, draft: ExperienceDraft) -> Result<Experience, StoreError> {
        // Omitted description stays NotSet so the row keeps its value.
        let mut changes = ActiveModel {
            company: Set(draft.company),
            role: Set(draft.role),
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

    async fn delete(&self, id: &str) -> Result<Experience, StoreError> {
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
