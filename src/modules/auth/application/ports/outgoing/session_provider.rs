use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin email the session was issued for.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session has expired")]
    Expired,

    #[error("Invalid session signature")]
    InvalidSignature,

    #[error("Malformed session token")]
    Malformed,

    #[error("Session encoding error: {0}")]
    EncodingError(String),
}

pub trait SessionProvider: Send + Sync {
    fn issue(&self, subject: &str) -> Result<String, SessionError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError>;
}
