use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::modules::content::application::domain::Record;
use crate::modules::content::application::ports::outgoing::{
    BackendProbe, RecordStore, StoreError,
};

/// Chooses the active backend per call: the primary (SQL) store when its
/// probe answers, the JSON fallback otherwise. The probe result is never
/// cached, so the database is picked up again on its next healthy request.
pub struct FallbackStore<R: Record> {
    primary: Option<(Arc<dyn RecordStore<R>>, Arc<dyn BackendProbe>)>,
    fallback: Arc<dyn RecordStore<R>>,
}

impl<R: Record> FallbackStore<R> {
    pub fn new(
        primary: Arc<dyn RecordStore<R>>,
        probe: Arc<dyn BackendProbe>,
        fallback: Arc<dyn RecordStore<R>>,
    ) -> Self {
        Self {
            primary: Some((primary, probe)),
            fallback,
        }
    }

    /// No database configured: every call goes straight to the JSON store,
    /// skipping the probe.
    pub fn json_only(fallback: Arc<dyn RecordStore<R>>) -> Self {
        Self {
            primary: None,
            fallback,
        }
    }

    async fn active(&self) -> &dyn RecordStore<R> {
        if let Some((store, probe)) = &self.primary {
            if probe.is_available().await {
                return store.as_ref();
            }
            debug!(kind = R::KIND, "database probe failed, using JSON fallback");
        }
        self.fallback.as_ref()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for FallbackStore<R> {
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        self.active().await.list().await
    }

    async fn insert(&self, record: R) -> Result<R, StoreError> {
        self.active().await.insert(record).await
    }

    async fn update(&self, id: &str, draft: R::Draft) -> Result<R, StoreError> {
        self.active().await.update(id, draft).await
    }

    async fn delete(&self, id: &str) -> Result<R, StoreError> {
        self.active().await.delete(id).await
    }
}
