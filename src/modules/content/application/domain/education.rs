use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Draft, MissingField, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    /// Free-text period ("2019 - 2023"), not parsed.
    pub year: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDraft {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
    /// Omitted means "leave as is" on update, empty on create.
    pub description: Option<String>,
}

impl Draft for EducationDraft {
    fn validate(&self) -> Result<(), MissingField> {
        if self.school.trim().is_empty() {
            return Err(MissingField("School"));
        }
        if self.degree.trim().is_empty() {
            return Err(MissingField("Degree"));
        }
        if self.year.trim().is_empty() {
            return Err(MissingField("Year"));
        }
        Ok(())
    }
}

impl Record for Education {
    type Draft = EducationDraft;

    const KIND: &'static str = "Education";
    const COLLECTION: &'static str = "education";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, draft: EducationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            school: draft.school,
            degree: draft.degree,
            year: draft.year,
            description: draft.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, draft: EducationDraft, now: DateTime<Utc>) {
        self.school = draft.school;
        self.degree = draft.degree;
        self.year = draft.year;
        if let Some(description) = draft.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}
