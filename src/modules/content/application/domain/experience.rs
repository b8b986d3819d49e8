use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Draft, MissingField, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    /// Free-text period, same convention as Education.
    pub year: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub year: String,
    /// Omitted means "leave as is" on update, empty on create.
    pub description: Option<String>,
}

impl Draft for ExperienceDraft {
    fn validate(&self) -> Result<(), MissingField> {
        if self.company.trim().is_empty() {
            return Err(MissingField("Company"));
        }
        if self.role.trim().is_empty() {
            return Err(MissingField("Role"));
        }
        if self.year.trim().is_empty() {
            return Err(MissingField("Year"));
        }
        Ok(())
    }
}

impl Record for Experience {
    type Draft = ExperienceDraft;

    const KIND: &'static str = "Experience";
    const COLLECTION: &'static str = "experience";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, draft: ExperienceDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            company: draft.company,
            role: draft.role,
            year: draft.year,
            description: draft.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, draft: ExperienceDraft, now: DateTime<Utc>) {
        self.company = draft.company;
        self.role = draft.role;
        self.year = draft.year;
        if let Some(description) = draft.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}
