pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::use_cases::ILoginAdminUseCase;
use crate::modules::content::application::domain::{Education, Experience, Project};
use crate::modules::content::application::ports::incoming::CollectionUseCases;

#[derive(Clone)]
pub struct AppState {
    pub projects: CollectionUseCases<Project>,
    pub education: CollectionUseCases<Education>,
    pub experience: CollectionUseCases<Experience>,
    pub login: Arc<dyn ILoginAdminUseCase>,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login::login);
    // Projects
    cfg.service(crate::content::adapter::incoming::web::routes::projects::get_projects);
    cfg.service(crate::content::adapter::incoming::web::routes::projects::create_project);
    cfg.service(crate::content::adapter::incoming::web::routes::projects::update_project);
    cfg.service(crate::content::adapter::incoming::web::routes::projects::delete_project);
    // Education
    cfg.service(crate::content::adapter::incoming::web::routes::education::get_education);
    cfg.service(crate::content::adapter::incoming::web::routes::education::create_education);
    cfg.service(crate::content::adapter::incoming::web::routes::education::update_education);
    cfg.service(crate::content::adapter::incoming::web::routes::education::delete_education);
    // Experience
    cfg.service(crate::content::adapter::incoming::web::routes::experience::get_experience);
    cfg.service(crate::content::adapter::incoming::web::routes::experience::create_experience);
    cfg.service(crate::content::adapter::incoming::web::routes::experience::update_experience);
    cfg.service(crate::content::adapter::incoming::web::routes::experience::delete_experience);
}
