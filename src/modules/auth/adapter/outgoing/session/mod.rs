mod session_config;
mod session_service;

pub use session_config::SessionConfig;
pub use session_service::SessionTokenService;
