use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::application::domain::EducationDraft;
use crate::modules::content::application::ports::incoming::{
    CreateRecordError, DeleteRecordError, ListRecordsError, UpdateRecordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdateEducationRequest {
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub draft: EducationDraft,
}

#[derive(Deserialize)]
pub struct DeleteEducationQuery {
    pub id: Option<String>,
}

#[get("/api/education")]
pub async fn get_education(data: web::Data<AppState>) -> HttpResponse {
    match data.education.list.execute().await {
        Ok(records) => ApiResponse::ok(&records),

        Err(ListRecordsError::StorageError(e)) => {
            error!("Storage error fetching education: {}", e);
            ApiResponse::internal_error("Failed to fetch education")
        }
    }
}

#[post("/api/education")]
pub async fn create_education(
    _session: AdminSession,
    body: web::Json<EducationDraft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.education.create.execute(body.into_inner()).await {
        Ok(created) => ApiResponse::created(&created),

        Err(CreateRecordError::Validation(msg)) => ApiResponse::bad_request(&msg),

        Err(CreateRecordError::StorageError(e)) => {
            error!("Storage error creating education: {}", e);
            ApiResponse::internal_error("Failed to create education")
        }
    }
}

#[put("/api/education")]
pub async fn update_education(
    _session: AdminSession,
    body: web::Json<UpdateEducationRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let body = body.into_inner();

    if body.id.is_empty() {
        return ApiResponse::bad_request("Education ID required");
    }

    match data.education.update.execute(&body.id, body.draft).await {
        Ok(updated) => ApiResponse::ok(&updated),

        Err(UpdateRecordError::Validation(msg)) => ApiResponse::bad_request(&msg),

        Err(UpdateRecordError::NotFound) => ApiResponse::not_found("Education not found"),

        Err(UpdateRecordError::StorageError(e)) => {
            error!("Storage error updating education: {}", e);
            ApiResponse::internal_error("Failed to update education")
        }
    }
}

#[delete("/api/education")]
pub async fn delete_education(
    _session: AdminSession,
    query: web::Query<DeleteEducationQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = match query.into_inner().id {
        Some(id) if !id.is_empty() => id,
        _ => return ApiResponse::bad_request("Education ID required"),
    };

    match data.education.delete.execute(&id).await {
        Ok(_) => ApiResponse::message("Education deleted successfully"),

        Err(DeleteRecordError::NotFound) => ApiResponse::not_found("Education not found"),

        Err(DeleteRecordError::StorageError(e)) => {
            error!("Storage error deleting education: {}", e);
            ApiResponse::internal_error("Failed to delete education")
        }
    }
}
