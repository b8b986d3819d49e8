use async_trait::async_trait;

/// Liveness probe for the primary (SQL) backend, consulted fresh on every
/// request. A failed probe means "use the JSON fallback" and is never
/// surfaced to the caller as an error.
#[async_trait]
pub trait BackendProbe: Send + Sync {
    async fn is_available(&self) -> bool;
}
