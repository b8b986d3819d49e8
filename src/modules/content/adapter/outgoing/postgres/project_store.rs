use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::map_db_err;
use crate::modules::content::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::{Project, ProjectDraft};
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};

#[derive(Clone)]
pub struct ProjectStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub fn to_active_model(record: &Project) -> ActiveModel {
    ActiveModel {
        id: Set(record.id.clone()),
        title: Set(record.title.clone()),
        description: Set(record.description.clone()),
        image: Set(record.image.clone()),
        technologies: Set(record.technologies.clone()),
        tags: Set(record.tags.clone()),
        github: Set(record.github.clone()),
        demo: Set(record.demo.clone()),
        created_at: Set(record.created_at.fixed_offset()),
        updated_at: Set(record.updated_at.fixed_offset()),
    }
}

fn model_to_record(model: projects::Model) -> Project {
    Project {
        id: model.id,
        title: model.title,
        description: model.description,
        image: model.image,
        technologies: model.technologies,
        tags: model.tags,
        github: model.github,
        demo: model.demo,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl RecordStore<Project> for ProjectStorePostgres {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn insert(&self, record: Project) -> Result<Project, StoreError> {
        let inserted = to_active_model(&record)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_record(inserted))
    }

    async fn update(&self, id: &str, draft: ProjectDraft) -> Result<Project, StoreError> {
        // Omitted optional fields stay NotSet so the row keeps its values.
        let mut changes = ActiveModel {
            title: Set(draft.title),
            description: Set(draft.description),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        if let Some(image) = draft.image {
            changes.image = Set(image);
        }
        if let Some(technologies) = draft.technologies {
            changes.technologies = Set(technologies);
        }
        if let Some(tags) = draft.tags {
            changes.tags = Set(tags);
        }
        if let Some(github) = draft.github {
            changes.github = Set(github);
        }
        if let Some(demo) = draft.demo {
            changes.demo = Set(demo);
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

    async fn delete(&self, id: &str) -> Result<Project, StoreError> {
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
