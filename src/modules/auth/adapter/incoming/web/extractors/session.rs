use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::ports::outgoing::SessionProvider;
use crate::shared::api::ApiResponse;

/// A verified admin session. Placing this extractor in a handler's signature
/// makes the route admin-only; failures short-circuit with a 401 before the
/// body is touched.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub subject: String,
}

fn auth_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let sessions = match req.app_data::<web::Data<Arc<dyn SessionProvider>>>() {
            Some(provider) => provider,
            None => {
                tracing::error!("SessionProvider missing from app data");
                return ready(Err(auth_error(ApiResponse::internal_error(
                    "Internal server error",
                ))));
            }
        };

        let token = match bearer_token(req) {
            Some(t) => t,
            None => return ready(Err(auth_error(ApiResponse::unauthorized()))),
        };

        match sessions.verify(&token) {
            Ok(claims) => ready(Ok(AdminSession {
                subject: claims.sub,
            })),
            Err(_) => ready(Err(auth_error(ApiResponse::unauthorized()))),
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
