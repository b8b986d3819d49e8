use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// The JSON fallback keeps the service usable without a database, so this
/// reports the probe result but never flips to 503.
#[get("/ready")]
pub async fn readiness(db: web::Data<Option<Arc<DatabaseConnection>>>) -> impl Responder {
    let database = match db.get_ref() {
        Some(conn) => {
            let probe = conn
                .execute(Statement::from_string(
                    conn.get_database_backend(),
                    "SELECT 1",
                ))
                .await;

            match probe {
                Ok(_) => "ok",
                Err(_) => "unreachable",
            }
        }
        None => "not_configured",
    };

    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        database,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_readiness_without_database_reports_not_configured() {
        let db: Option<Arc<DatabaseConnection>> = None;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "not_configured");
    }

    #[actix_web::test]
    async fn test_readiness_with_healthy_database_reports_ok() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let db: Option<Arc<DatabaseConnection>> = Some(Arc::new(conn));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "ok");
    }

    #[actix_web::test]
    async fn test_readiness_with_failing_database_still_returns_200() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let db: Option<Arc<DatabaseConnection>> = Some(Arc::new(conn));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "unreachable");
    }
}
