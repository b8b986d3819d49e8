//! One-shot import of the JSON documents into Postgres.
//!
//! Reads each collection document from DATA_DIR and inserts the records,
//! skipping ids that already exist. Safe to re-run.

use anyhow::{Context, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait};
use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_backend::content::adapter::outgoing::postgres::{
    education_active_model, experience_active_model, project_active_model,
};
use portfolio_backend::content::adapter::outgoing::sea_orm_entity::{
    education, experience, projects,
};
use portfolio_backend::content::adapter::outgoing::JsonFileStore;
use portfolio_backend::content::application::domain::{Education, Experience, Project, Record};
use portfolio_backend::content::application::ports::outgoing::{RecordStore, StoreError};

async fn read_collection<R: Record>(data_dir: &str) -> Result<Vec<R>> {
    let store = JsonFileStore::<R>::new(data_dir);

    match store.list().await {
        Ok(records) => Ok(records),
        // A missing document just means there is nothing to import.
        Err(StoreError::Io(e)) => {
            info!("No {} document to import ({e}), skipping", R::COLLECTION);
            Ok(vec![])
        }
        Err(e) => Err(anyhow::anyhow!("reading {} document: {e}", R::COLLECTION)),
    }
}

async fn import_projects(db: &DatabaseConnection, data_dir: &str) -> Result<u64> {
    let records = read_collection::<Project>(data_dir).await?;
    if records.is_empty() {
        return Ok(0);
    }

    let models: Vec<_> = records.iter().map(project_active_model).collect();

    let inserted = projects::Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(projects::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .context("inserting projects")?;

    Ok(inserted)
}

async fn import_education(db: &DatabaseConnection, data_dir: &str) -> Result<u64> {
    let records = read_collection::<Education>(data_dir).await?;
    if records.is_empty() {
        return Ok(0);
    }

    let models: Vec<_> = records.iter().map(education_active_model).collect();

    let inserted = education::Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(education::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .context("inserting education")?;

    Ok(inserted)
}

async fn import_experience(db: &DatabaseConnection, data_dir: &str) -> Result<u64> {
    let records = read_collection::<Experience>(data_dir).await?;
    if records.is_empty() {
        return Ok(0);
    }

    let models: Vec<_> = records.iter().map(experience_active_model).collect();

    let inserted = experience::Entity::insert_many(models)
        .on_conflict(
            OnConflict::column(experience::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .context("inserting experience")?;

    Ok(inserted)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());

    let db = Database::connect(ConnectOptions::new(db_url))
        .await
        .context("connecting to database")?;

    let projects = import_projects(&db, &data_dir).await?;
    info!("Imported {projects} projects");

    let education = import_education(&db, &data_dir).await?;
    info!("Imported {education} education records");

    let experience = import_experience(&db, &data_dir).await?;
    info!("Imported {experience} experience records");

    Ok(())
}
