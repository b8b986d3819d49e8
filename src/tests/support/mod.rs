pub mod app_state_builder;
pub mod stubs;

pub use app_state_builder::TestAppStateBuilder;
pub use stubs::stub_collection;

use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::adapter::outgoing::session::{SessionConfig, SessionTokenService};
use crate::modules::auth::application::ports::outgoing::SessionProvider;

pub const TEST_SESSION_SECRET: &str = "FAKE_SESSION_SECRET_DO_NOT_USE";

pub fn session_service() -> Arc<SessionTokenService> {
    Arc::new(SessionTokenService::new(SessionConfig {
        secret: TEST_SESSION_SECRET.to_string(),
        ttl_seconds: 3600,
    }))
}

/// App data blob for the `AdminSession` extractor.
pub fn session_data() -> web::Data<Arc<dyn SessionProvider>> {
    web::Data::new(session_service() as Arc<dyn SessionProvider>)
}

pub fn admin_token() -> String {
    session_service()
        .issue("admin@example.com")
        .expect("test token should be issued")
}
