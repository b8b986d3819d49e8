use actix_web::{http::StatusCode, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::modules::auth::application::use_cases::LoginAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[post("/api/auth/login")]
pub async fn login(data: web::Data<AppState>, body: web::Json<LoginRequest>) -> HttpResponse {
    match data.login.execute(&body.email, &body.password).await {
        Ok(token) => ApiResponse::ok(&LoginResponse { token }),

        Err(LoginAdminError::InvalidCredentials) => {
            ApiResponse::error(StatusCode::UNAUTHORIZED, "Invalid credentials")
        }

        Err(LoginAdminError::Session(msg)) => {
            tracing::error!("Failed to issue session token: {}", msg);
            ApiResponse::internal_error("Failed to log in")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::tests::support::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_login_with_valid_credentials_returns_token() {
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(App::new().app_data(state).service(login)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@example.com",
                "password": "s3cret"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(App::new().app_data(state).service(login)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@example.com",
                "password": "wrong"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[actix_web::test]
    async fn test_login_with_missing_fields_is_unauthorized() {
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(App::new().app_data(state).service(login)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_issued_token_verifies_against_session_service() {
        let state = TestAppStateBuilder::new().build();
        let sessions = crate::tests::support::session_service();

        let app = test::init_service(App::new().app_data(state).service(login)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@example.com",
                "password": "s3cret"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        let token = body["token"].as_str().unwrap();

        use crate::modules::auth::application::ports::outgoing::SessionProvider;
        let claims = sessions.verify(token).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
    }
}
