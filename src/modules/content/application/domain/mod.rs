mod education;
mod experience;
mod project;
mod record;

pub use education::{Education, EducationDraft};
pub use experience::{Experience, ExperienceDraft};
pub use project::{Project, ProjectDraft};
pub use record::{Draft, MissingField, Record};
