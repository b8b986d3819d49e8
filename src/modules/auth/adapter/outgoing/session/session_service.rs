use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::modules::auth::application::ports::outgoing::{
    SessionClaims, SessionError, SessionProvider,
};

use super::session_config::SessionConfig;

/// HS256 session tokens for the single admin account.
#[derive(Clone)]
pub struct SessionTokenService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("config", &"SessionConfig")
            .finish()
    }
}

impl SessionTokenService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl SessionProvider for SessionTokenService {
    fn issue(&self, subject: &str) -> Result<String, SessionError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.ttl_seconds);

        let claims = SessionClaims {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SessionError::EncodingError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session verification failed: token expired");
                        SessionError::Expired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid session signature detected");
                        SessionError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Session verification failed: malformed token");
                        SessionError::Malformed
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with(secret: &str, ttl_seconds: i64) -> SessionTokenService {
        SessionTokenService::new(SessionConfig {
            secret: secret.to_string(),
            ttl_seconds,
        })
    }

    fn test_service() -> SessionTokenService {
        service_with("FAKE_SESSION_SECRET_DO_NOT_USE", 3600)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = test_service();

        let token = service
            .issue("admin@example.com")
            .expect("token should be issued");

        let claims = service.verify(&token).expect("token should verify");
        assert_eq!(claims.sub, "admin@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Beyond the 30 second leeway.
        let service = service_with("FAKE_SESSION_SECRET_DO_NOT_USE", -35);

        let token = service.issue("admin@example.com").unwrap();
        let result = service.verify(&token);

        assert!(matches!(result.unwrap_err(), SessionError::Expired));
    }

    #[test]
    fn test_token_signed_with_different_secret_is_rejected() {
        let service = test_service();
        let other = service_with("A_DIFFERENT_SECRET", 3600);

        let token = other.issue("admin@example.com").unwrap();
        let result = service.verify(&token);

        assert!(matches!(result.unwrap_err(), SessionError::InvalidSignature));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = test_service();
        let result = service.verify("not.a.token");
        assert!(matches!(result.unwrap_err(), SessionError::Malformed));
    }

    #[test]
    fn test_tampered_token_fails_verification() {
        let service = test_service();
        let mut token = service.issue("admin@example.com").unwrap();
        token.push('x');

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_the_secret() {
        let service = test_service();
        let debug_str = format!("{:?}", service);
        assert!(!debug_str.contains("FAKE_SESSION_SECRET_DO_NOT_USE"));
    }

    #[test]
    fn test_expiry_honors_configured_ttl() {
        let service = service_with("FAKE_SESSION_SECRET_DO_NOT_USE", 60);

        let token = service.issue("admin@example.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 60);
    }
}
