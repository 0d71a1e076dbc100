//! Project commands driven from the command line

use clap::Args;
use tracing::info;

use crate::models::{
    ProjectStatus, DEFAULT_DESCRIPTION, DEFAULT_NAME, DEFAULT_RELATED_PERSON, DEFAULT_TAGS,
};
use crate::services::GraphqlClient;
use crate::views::{ModalError, ProjectsPage};

/// Field values for `create`; each flag defaults to the form default.
#[derive(Debug, Clone, Args)]
pub struct CreateProjectArgs {
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    #[arg(long, default_value = DEFAULT_RELATED_PERSON)]
    pub related_person: String,

    #[arg(long, default_value = "active")]
    pub status: ProjectStatus,

    /// Hours spent; an empty value is sent as 0
    #[arg(long, default_value = "10")]
    pub time_spent: String,

    /// Hours remaining; an empty value is sent as 0
    #[arg(long, default_value = "10")]
    pub time_remain: String,

    /// Comma separated
    #[arg(long, default_value = DEFAULT_TAGS)]
    pub tags: String,
}

/// Load the page and render it
pub async fn list_projects(client: GraphqlClient) -> String {
    let page = ProjectsPage::new(client);
    page.mount().await;
    page.render()
}

/// Fill the create dialog from `args`, submit it and render the page
/// afterwards. On failure the rendered dialog carries the error inline.
pub async fn create_project(
    client: GraphqlClient,
    args: &CreateProjectArgs,
) -> Result<String, (ModalError, String)> {
    let mut page = ProjectsPage::new(client);
    page.mount().await;
    page.open_create();
    fill_form(&mut page, args);

    match page.submit_create().await {
        Ok(project) => {
            info!("Project {} created from the command line", project.id);
            Ok(page.render())
        }
        Err(e) => {
            let rendered = page.render();
            Err((e, rendered))
        }
    }
}

fn fill_form(page: &mut ProjectsPage, args: &CreateProjectArgs) {
    let modal = page.modal_mut();
    modal.set_name(args.name.as_str());
    modal.set_description(args.description.as_str());
    modal.set_related_person(args.related_person.as_str());
    modal.set_status(args.status);
    modal.set_time_spent(&args.time_spent);
    modal.set_time_remain(&args.time_remain);
    modal.set_tags(args.tags.as_str());
}
