use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::application::domain::ExperienceDraft;
use crate::modules::content::application::ports::incoming::{
    CreateRecordError, DeleteRecordError, ListRecordsError, UpdateRecordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdateExperienceRequest {
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub draft: ExperienceDraft,
}

#[derive(Deserialize)]
pub struct DeleteExperienceQuery {
    pub id: Option<String>,
}

#[get("/api/experience")]
pub async fn get_experience(data: web::Data<AppState>) -> HttpResponse {
    match data.experience.list.execute().await {
        Ok(records) => ApiResponse::ok(&records),

        Err(ListRecordsError::StorageError(e)) => {
            error!("Storage error fetching experience: {}", e);
            ApiResponse::internal_error("Failed to fetch experience")
        }
    }
}

#[post("/api/experience")]
pub async fn create_experience(
    _session: AdminSession,
    body: web::Json<ExperienceDraft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.experience.create.execute(body.into_inner()).await {
        Ok(created) => ApiResponse::created(&created),

        Err(CreateRecordError::Validation(msg)) => ApiResponse::bad_request(&msg),

        Err(CreateRecordError::StorageError(e)) => {
            error!("Storage error creating experience: {}", e);
            ApiResponse::internal_error("Failed to create experience")
        }
    }
}

#[put("/api/experience")]
pub async fn update_experience(
    _session: AdminSession,
    body: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let body = body.into_inner();

    if body.id.is_empty() {
        return ApiResponse::bad_request("Experience ID required");
    }

    match data.experience.update.execute(&body.id, body.draft).await {
        Ok(updated) => ApiResponse::ok(&updated),

        Err(UpdateRecordError::Validation(msg)) => ApiResponse::bad_request(&msg),

        Err(UpdateRecordError::NotFound) => ApiResponse::not_found("Experience not found"),

        Err(UpdateRecordError::StorageError(e)) => {
            error!("Storage error updating experience: {}", e);
            ApiResponse::internal_error("Failed to update experience")
        }
    }
}

#[delete("/api/experience")]
pub async fn delete_experience(
    _session: AdminSession,
    query: web::Query<DeleteExperienceQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = match query.into_inner().id {
        Some(id) if !id.is_empty() => id,
        _ => return ApiResponse::bad_request("Experience ID required"),
    };

    match data.experience.delete.execute(&id).await {
        Ok(_) => ApiResponse::message("Experience deleted successfully"),

        Err(DeleteRecordError::NotFound) => ApiResponse::not_found("Experience not found"),

        Err(DeleteRecordError::StorageError(e)) => {
            error!("Storage error deleting experience: {}", e);
            ApiResponse::internal_error("Failed to delete experience")
        }
    }
}
