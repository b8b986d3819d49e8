use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_backend::auth::adapter::outgoing::session::{SessionConfig, SessionTokenService};
use portfolio_backend::auth::application::domain::AdminCredentials;
use portfolio_backend::auth::application::ports::outgoing::SessionProvider;
use portfolio_backend::auth::application::use_cases::LoginAdminUseCase;
use portfolio_backend::content::adapter::outgoing::postgres::{
    EducationStorePostgres, ExperienceStorePostgres, PostgresProbe, ProjectStorePostgres,
};
use portfolio_backend::content::adapter::outgoing::{FallbackStore, JsonFileStore};
use portfolio_backend::content::application::domain::{Education, Experience, Project, Record};
use portfolio_backend::content::application::ports::incoming::CollectionUseCases;
use portfolio_backend::content::application::ports::outgoing::{BackendProbe, RecordStore};
use portfolio_backend::content::application::service::CollectionService;
use portfolio_backend::shared::api::custom_json_config;
use portfolio_backend::{init_routes, AppState};

/// Wires one resource kind: SQL store behind the per-request probe when a
/// database is configured, JSON-only otherwise.
fn wire_collection<R: Record>(
    primary: Option<Arc<dyn RecordStore<R>>>,
    probe: Option<Arc<dyn BackendProbe>>,
    data_dir: &str,
) -> CollectionUseCases<R> {
    let json: Arc<dyn RecordStore<R>> = Arc::new(JsonFileStore::<R>::new(data_dir));

    let store: Arc<dyn RecordStore<R>> = match (primary, probe) {
        (Some(primary), Some(probe)) => Arc::new(FallbackStore::new(primary, probe, json)),
        _ => Arc::new(FallbackStore::json_only(json)),
    };

    CollectionUseCases::from_service(Arc::new(CollectionService::new(store)))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let admin_email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL is not set in .env file");
    let admin_password =
        env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection is optional. Without one (or when the connect
    // fails) every request is served from the JSON documents.
    let db_arc: Option<Arc<DatabaseConnection>> = match env::var("DATABASE_URL") {
        Ok(db_url) => {
            let mut opt = ConnectOptions::new(db_url);
            opt.max_connections(50)
                .min_connections(10)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            match Database::connect(opt).await {
                Ok(conn) => Some(Arc::new(conn)),
                Err(e) => {
                    warn!("Failed to connect to database, serving from JSON files: {e}");
                    None
                }
            }
        }
        Err(_) => {
            info!("DATABASE_URL not set, serving from JSON files");
            None
        }
    };

    let probe: Option<Arc<dyn BackendProbe>> = db_arc
        .as_ref()
        .map(|db| Arc::new(PostgresProbe::new(Arc::clone(db))) as Arc<dyn BackendProbe>);

    let projects = wire_collection::<Project>(
        db_arc.as_ref().map(|db| {
            Arc::new(ProjectStorePostgres::new(Arc::clone(db))) as Arc<dyn RecordStore<Project>>
        }),
        probe.clone(),
        &data_dir,
    );
    let education = wire_collection::<Education>(
        db_arc.as_ref().map(|db| {
            Arc::new(EducationStorePostgres::new(Arc::clone(db)))
                as Arc<dyn RecordStore<Education>>
        }),
        probe.clone(),
        &data_dir,
    );
    let experience = wire_collection::<Experience>(
        db_arc.as_ref().map(|db| {
            Arc::new(ExperienceStorePostgres::new(Arc::clone(db)))
                as Arc<dyn RecordStore<Experience>>
        }),
        probe,
        &data_dir,
    );

    let session_service = SessionTokenService::new(SessionConfig::from_env());
    let login = LoginAdminUseCase::new(
        AdminCredentials::new(admin_email, admin_password),
        Arc::new(session_service.clone()),
    );

    let state = AppState {
        projects,
        education,
        experience,
        login: Arc::new(login),
    };

    let session_provider_arc: Arc<dyn SessionProvider> = Arc::new(session_service);
    let db_for_server = db_arc.clone();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_provider_arc)))
            .app_data(web::Data::new(db_for_server.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
