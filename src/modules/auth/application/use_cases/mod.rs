mod login_admin;

pub use login_admin::{ILoginAdminUseCase, LoginAdminError, LoginAdminUseCase};
