use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::modules::content::application::ports::outgoing::BackendProbe;

/// `SELECT 1` against the shared connection pool. No retries; any error
/// (network, auth, timeout) reads as "unavailable".
#[derive(Clone)]
pub struct PostgresProbe {
    db: Arc<DatabaseConnection>,
}

impl PostgresProbe {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BackendProbe for PostgresProbe {
    async fn is_available(&self) -> bool {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .is_ok()
    }
}
