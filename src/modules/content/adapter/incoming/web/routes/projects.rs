use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::application::domain::ProjectDraft;
use crate::modules::content::application::ports::incoming::{
    CreateRecordError, DeleteRecordError, ListRecordsError, UpdateRecordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub draft: ProjectDraft,
}

#[derive(Deserialize)]
pub struct DeleteProjectQuery {
    pub id: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/projects")]
pub async fn get_projects(data: web::Data<AppState>) -> HttpResponse {
    match data.projects.list.execute().await {
        Ok(records) => ApiResponse::ok(&records),

        Err(ListRecordsError::StorageError(e)) => {
            error!("Storage error fetching projects: {}", e);
            ApiResponse::internal_error("Failed to fetch projects")
        }
    }
}

#[post("/api/projects")]
pub async fn create_project(
    _session: AdminSession,
    body: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.projects.create.execute(body.into_inner()).await {
        Ok(created) => ApiResponse::created(&created),

        Err(CreateRecordError::Validation(msg)) => ApiResponse::bad_request(&msg),

        Err(CreateRecordError::StorageError(e)) => {
            error!("Storage error creating project: {}", e);
            ApiResponse::internal_error("Failed to create project")
        }
    }
}

#[put("/api/projects")]
pub async fn update_project(
    _session: AdminSession,
    body: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let body = body.into_inner();

    if body.id.is_empty() {
        return ApiResponse::bad_request("Project ID required");
    }

    match data.projects.update.execute(&body.id, body.draft).await {
        Ok(updated) => ApiResponse::ok(&updated),

        Err(UpdateRecordError::Validation(msg)) => ApiResponse::bad_request(&msg),

        Err(UpdateRecordError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(UpdateRecordError::StorageError(e)) => {
            error!("Storage error updating project: {}", e);
            ApiResponse::internal_error("Failed to update project")
        }
    }
}

#[delete("/api/projects")]
pub async fn delete_project(
    _session: AdminSession,
    query: web::Query<DeleteProjectQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = match query.into_inner().id {
        Some(id) if !id.is_empty() => id,
        _ => return ApiResponse::bad_request("Project ID required"),
    };

    match data.projects.delete.execute(&id).await {
        Ok(_) => ApiResponse::message("Project deleted successfully"),

        Err(DeleteRecordError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(DeleteRecordError::StorageError(e)) => {
            error!("Storage error deleting project: {}", e);
            ApiResponse::internal_error("Failed to delete project")
        }
    }
}
