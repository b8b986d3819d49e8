mod session;

pub use session::AdminSession;
