use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// Required field missing or empty on a create/update payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

/// The mutable fields of one record kind, as submitted on create and update.
pub trait Draft {
    /// Rejects the payload when a required field is missing or blank.
    /// Runs before any storage access.
    fn validate(&self) -> Result<(), MissingField>;
}

/// One resource kind's record shape. The three kinds (Project, Education,
/// Experience) share the same lifecycle and only differ in their fields, so
/// the stores and the CRUD service are generic over this trait.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: Draft + Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Singular display name used in wire messages ("Project not found").
    const KIND: &'static str;

    /// Basename of the collection's JSON document, without extension.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    /// Builds a complete record from a validated draft. `createdAt` and
    /// `updatedAt` both start at `now`; omitted optional fields take their
    /// defaults.
    fn create(id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Merges the draft into the record: required fields are replaced,
    /// optional fields only when the draft carries them. `id` and `createdAt`
    /// stay, `updatedAt` bumps to `now`.
    fn apply(&mut self, draft: Self::Draft, now: DateTime<Utc>);
}
