pub mod education;
pub mod experience;
pub mod projects;
