//! Commands run from the command line

pub mod projects;

pub use projects::{create_project, list_projects, CreateProjectArgs};
