pub use sea_orm_migration::prelude::*;

mod m20260824_000001_create_table_projects;
mod m20260824_000002_create_table_education;
mod m20260824_000003_create_table_experience;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260824_000001_create_table_projects::Migration),
            Box::new(m20260824_000002_create_table_education::Migration),
            Box::new(m20260824_000003_create_table_experience::Migration),
        ]
    }
}
