use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::AdminCredentials;
use crate::modules::auth::application::ports::outgoing::SessionProvider;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session error: {0}")]
    Session(String),
}

#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<String, LoginAdminError>;
}

pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    sessions: Arc<dyn SessionProvider>,
}

impl LoginAdminUseCase {
    pub fn new(credentials: AdminCredentials, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            credentials,
            sessions,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, email: &str, password: &str) -> Result<String, LoginAdminError> {
        if !self.credentials.matches(email, password) {
            return Err(LoginAdminError::InvalidCredentials);
        }

        self.sessions
            .issue(email)
            .map_err(|e| LoginAdminError::Session(e.to_string()))
    }
}
