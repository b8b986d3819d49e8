use std::env;

const DEFAULT_TTL_SECONDS: i64 = 86400;

#[derive(Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let secret = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in .env file");

        let ttl_seconds = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECONDS);

        Self {
            secret,
            ttl_seconds,
        }
    }
}
