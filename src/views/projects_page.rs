//! Projects page: header, card list and the create dialog

use super::create_project_modal::{CreateProjectModal, ModalError};
use super::project_list::ProjectListView;
use crate::models::Project;
use crate::services::{GraphqlClient, ProjectService};

pub const PAGE_TITLE: &str = "Projects";

pub struct ProjectsPage {
    list: ProjectListView,
    modal: CreateProjectModal,
}

impl ProjectsPage {
    pub fn new(client: GraphqlClient) -> Self {
        let service = ProjectService::new(client);
        Self {
            modal: CreateProjectModal::new(service.clone()),
            list: ProjectListView::new(service),
        }
    }

    pub fn list(&self) -> &ProjectListView {
        &self.list
    }

    pub fn modal(&self) -> &CreateProjectModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut CreateProjectModal {
        &mut self.modal
    }

    /// The dialog owns the open flag; the page only reads it.
    pub fn is_create_open(&self) -> bool {
        self.modal.is_open()
    }

    /// First load after the page is shown.
    pub async fn mount(&self) {
        self.list.load().await;
    }

    /// The `New` action.
    pub fn open_create(&mut self) {
        self.modal.open();
    }

    /// Submit the dialog; on success the list is fetched again so the new
    /// project shows up.
    pub async fn submit_create(&mut self) -> Result<Project, ModalError> {
        let project = self.modal.submit().await?;
        self.list.refetch().await;
        Ok(project)
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}  [+ New]\n\n", PAGE_TITLE);
        out.push_str(&self.list.render());
        if self.is_create_open() {
            out.push('\n');
            out.push_str(&self.modal.render());
        }
        out
    }
}
