use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::modules::content::application::domain::Record;
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};

/// Stores one resource kind's whole collection as a single JSON array
/// document (`<data_dir>/<collection>.json`). Every mutation re-reads and
/// rewrites the full document; the mutex serializes those read-modify-write
/// cycles within this process. Writers in other processes still race
/// (last write wins), which the single-admin deployment accepts.
pub struct JsonFileStore<R: Record> {
    path: PathBuf,
    guard: Mutex<()>,
    _kind: PhantomData<R>,
}

impl<R: Record> JsonFileStore<R> {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", R::COLLECTION)),
            guard: Mutex::new(()),
            _kind: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<R>, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {e}", self.path.display())))?;

        serde_json::from_str(&raw).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn write_all(&self, records: &[R]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, raw)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {e}", self.path.display())))
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for JsonFileStore<R> {
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        let _guard = self.guard.lock().await;
        self.read_all().await
    }

    async fn insert(&self, record: R) -> Result<R, StoreError> {
        let _guard = self.guard.lock().await;

        let mut records = self.read_all().await?;
        // Prepend so the document stays newest-first, matching the SQL
        // backend's createdAt DESC ordering.
        records.insert(0, record.clone());
        self.write_all(&records).await?;

        Ok(record)
    }

    async fn update(&self, id: &str, draft: R::Draft) -> Result<R, StoreError> {
        let _guard = self.guard.lock().await;

        let mut records = self.read_all().await?;
        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound)?;

        records[idx].apply(draft, Utc::now());
        let updated = records[idx].clone();
        self.write_all(&records).await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<R, StoreError> {
        let _guard = self.guard.lock().await;

        let mut records = self.read_all().await?;
        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound)?;

        let removed = records.remove(idx);
        self.write_all(&records).await?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::content::application::domain::{Project, ProjectDraft};

    fn temp_data_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-json-store-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn store_in(dir: &Path) -> JsonFileStore<Project> {
        JsonFileStore::new(dir)
    }

    fn sample(id: &str, title: &str) -> Project {
        Project::create(
            id.to_string(),
            ProjectDraft {
                title: title.to_string(),
                description: "desc".to_string(),
                ..Default::default()
            },
            Utc::now(),
        )
    }

    fn seed(dir: &Path, records: &[Project]) {
        let raw = serde_json::to_string_pretty(records).unwrap();
        std::fs::write(dir.join("projects.json"), raw).unwrap();
    }

    #[tokio::test]
    async fn test_list_missing_document_is_an_error() {
        let dir = temp_data_dir();
        let store = store_in(&dir);

        let result = store.list().await;
        assert!(matches!(result.unwrap_err(), StoreError::Io(_)));
    }

    #[tokio::test]
    async fn test_list_malformed_document_is_an_error() {
        let dir = temp_data_dir();
        std::fs::write(dir.join("projects.json"), "not json at all").unwrap();
        let store = store_in(&dir);

        let result = store.list().await;
        assert!(matches!(result.unwrap_err(), StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_list_preserves_document_order() {
        let dir = temp_data_dir();
        seed(&dir, &[sample("b", "Second"), sample("a", "First")]);
        let store = store_in(&dir);

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "b");
        assert_eq!(records[1].id, "a");
    }

    #[tokio::test]
    async fn test_insert_prepends_and_persists() {
        let dir = temp_data_dir();
        seed(&dir, &[sample("old", "Old")]);
        let store = store_in(&dir);

        store.insert(sample("new", "New")).await.unwrap();

        // Re-open to prove the write hit the disk, not just memory.
        let reopened = store_in(&dir);
        let records = reopened.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "new");
        assert_eq!(records[1].id, "old");
    }

    #[tokio::test]
    async fn test_update_rewrites_fields_in_place() {
        let dir = temp_data_dir();
        let original = sample("p-1", "Before");
        seed(&dir, &[original.clone()]);
        let store = store_in(&dir);

        let updated = store
            .update(
                "p-1",
                ProjectDraft {
                    title: "After".to_string(),
                    description: "desc".to_string(),
                    technologies: Some(vec!["Rust".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, "p-1");
        assert_eq!(updated.title, "After");
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);

        let records = store.list().await.unwrap();
        assert_eq!(records[0].title, "After");
    }

    #[tokio::test]
    async fn test_update_preserves_omitted_optional_fields() {
        let dir = temp_data_dir();
        let mut original = sample("p-1", "Before");
        original.image = "/img/shot.png".to_string();
        original.github = "https://github.com/user/repo".to_string();
        seed(&dir, &[original]);
        let store = store_in(&dir);

        let updated = store
            .update(
                "p-1",
                ProjectDraft {
                    title: "After".to_string(),
                    description: "desc".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "After");
        assert_eq!(updated.image, "/img/shot.png");
        assert_eq!(updated.github, "https://github.com/user/repo");

        let records = store.list().await.unwrap();
        assert_eq!(records[0].image, "/img/shot.png");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = temp_data_dir();
        seed(&dir, &[sample("p-1", "Only")]);
        let store = store_in(&dir);

        let result = store
            .update(
                "missing",
                ProjectDraft {
                    title: "X".to_string(),
                    description: "Y".to_string(),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), StoreError::NotFound));
        // A rejected update must not rewrite the document.
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_record() {
        let dir = temp_data_dir();
        seed(&dir, &[sample("a", "A"), sample("b", "B")]);
        let store = store_in(&dir);

        let removed = store.delete("a").await.unwrap();
        assert_eq!(removed.id, "a");

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "b");

        let again = store.delete("a").await;
        assert!(matches!(again.unwrap_err(), StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_document_round_trips_camel_case_fields() {
        let dir = temp_data_dir();
        seed(&dir, &[sample("p-1", "Foo")]);
        let store = store_in(&dir);
        store.insert(sample("p-2", "Bar")).await.unwrap();

        let raw = std::fs::read_to_string(dir.join("projects.json")).unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"updatedAt\""));
    }
}
