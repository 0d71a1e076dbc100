//! Views
//!
//! Each view keeps its own state and renders it as plain text:
//! - Project card: stateless summary of one project
//! - Project list: query state and cards
//! - Create-project modal: form draft and the create mutation
//! - Projects page: composition of the list and the modal

pub mod create_project_modal;
pub mod project_card;
pub mod project_list;
pub mod projects_page;

pub use create_project_modal::{CreateProjectModal, ModalError};
pub use project_card::{render_card, KanbanCardProps, Milestones};
pub use project_list::{ListState, ProjectCard, ProjectListView};
pub use projects_page::ProjectsPage;
