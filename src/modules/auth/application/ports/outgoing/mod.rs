mod session_provider;

pub use session_provider::{SessionClaims, SessionError, SessionProvider};
