use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Draft, MissingField, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional fields stay `None` when omitted from the payload: a create fills
/// them with defaults, an update leaves the stored values alone. A payload
/// carrying only `title` and `description` is valid for both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl Draft for ProjectDraft {
    fn validate(&self) -> Result<(), MissingField> {
        if self.title.trim().is_empty() {
            return Err(MissingField("Title"));
        }
        if self.description.trim().is_empty() {
            return Err(MissingField("Description"));
        }
        Ok(())
    }
}

impl Record for Project {
    type Draft = ProjectDraft;

    const KIND: &'static str = "Project";
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, draft: ProjectDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image.unwrap_or_default(),
            technologies: draft.technologies.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
            github: draft.github.unwrap_or_default(),
            demo: draft.demo.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, draft: ProjectDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.description = draft.description;
        if let Some(image) = draft.image {
            self.image = image;
        }
        if let Some(technologies) = draft.technologies {
            self.technologies = technologies;
        }
        if let Some(tags) = draft.tags {
            self.tags = tags;
        }
        if let Some(github) = draft.github {
            self.github = github;
        }
        if let Some(demo) = draft.demo {
            self.demo = demo;
        }
        self.updated_at = now;
    }
}
