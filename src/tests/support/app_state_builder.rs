use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::domain::AdminCredentials;
use crate::modules::auth::application::use_cases::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::modules::content::application::domain::{Education, Experience, Project};
use crate::modules::content::application::ports::incoming::CollectionUseCases;
use crate::tests::support::{session_service, stub_collection};
use crate::AppState;

pub struct TestAppStateBuilder {
    projects: CollectionUseCases<Project>,
    education: CollectionUseCases<Education>,
    experience: CollectionUseCases<Experience>,
    login: Arc<dyn ILoginAdminUseCase>,
}

impl TestAppStateBuilder {
    /// Stubs everywhere, plus a real login use case wired to the shared test
    /// session secret and `admin@example.com` / `s3cret`.
    pub fn new() -> Self {
        let login = LoginAdminUseCase::new(
            AdminCredentials::new("admin@example.com".to_string(), "s3cret".to_string()),
            session_service(),
        );

        Self {
            projects: stub_collection(),
            education: stub_collection(),
            experience: stub_collection(),
            login: Arc::new(login),
        }
    }

    pub fn with_projects(mut self, use_cases: CollectionUseCases<Project>) -> Self {
        self.projects = use_cases;
        self
    }

    pub fn with_education(mut self, use_cases: CollectionUseCases<Education>) -> Self {
        self.education = use_cases;
        self
    }

    pub fn with_experience(mut self, use_cases: CollectionUseCases<Experience>) -> Self {
        self.experience = use_cases;
        self
    }

    pub fn with_login(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            projects: self.projects,
            education: self.education,
            experience: self.experience,
            login: self.login,
        })
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
