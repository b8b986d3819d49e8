// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Error bodies are always a single `error` string, matching what the admin
/// dashboard expects. Successful responses carry the record(s) directly.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: &T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: &T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageBody {
            message: message.to_string(),
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            error: message.to_string(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized() -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
