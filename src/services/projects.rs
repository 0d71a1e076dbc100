//! Project queries and mutations

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::client::{FetchPolicy, GraphqlClient};
use crate::adapters::Operation;
use crate::error::ClientError;
use crate::models::{CreateProjectInput, Project};

pub const GET_ALL_PROJECTS: Operation = Operation {
    name: "GetAllProjects",
    document: r#"query GetAllProjects {
  projects {
    id
    name
    description
    related_person
    status
    time_spent
    time_remain
    tags
    created_at
    updated_at
  }
}"#,
};

pub const CREATE_PROJECT: Operation = Operation {
    name: "CreateProject",
    document: r#"mutation CreateProject($data: CreateProjectInput!) {
  createProject(data: $data) {
    id
    name
    description
    related_person
    status
    time_spent
    time_remain
    tags
    created_at
    updated_at
  }
}"#,
};

#[derive(Debug, Deserialize)]
struct ProjectsData {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectData {
    create_project: Project,
}

/// Typed access to the project operations
#[derive(Clone)]
pub struct ProjectService {
    client: GraphqlClient,
}

impl ProjectService {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphqlClient {
        &self.client
    }

    /// Fetch every project, in server order
    pub async fn get_all_projects(&self, policy: FetchPolicy) -> Result<Vec<Project>, ClientError> {
        let data: ProjectsData = self
            .client
            .query(&GET_ALL_PROJECTS, json!({}), policy)
            .await?;
        debug!("Fetched {} projects", data.projects.len());
        Ok(data.projects)
    }

    /// Create a project and return the stored record
    pub async fn create_project(&self, input: &CreateProjectInput) -> Result<Project, ClientError> {
        let data: CreateProjectData = self
            .client
            .mutate(&CREATE_PROJECT, json!({ "data": input }))
            .await?;
        let project = data.create_project;
        info!("Created project: {} ({})", project.name, project.id);
        Ok(project)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::adapters::testing::ScriptedTransport;
    use crate::models::ProjectDraft;
    use std::sync::Arc;

    fn service(transport: &Arc<ScriptedTransport>) -> ProjectService {
        ProjectService::new(GraphqlClient::with_transport(transport.clone()))
    }

    #[tokio::test]
    async fn test_get_all_projects_keeps_order() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_data(projects_response(vec![
            project_json(3, "Gamma"),
            project_json(1, "Alpha"),
        ]));

        let projects = service(&transport)
            .get_all_projects(FetchPolicy::CacheFirst)
            .await
            .unwrap();

        let ids: Vec<i64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);

        let requests = transport.requests();
        let request = &requests[0];
        assert_eq!(request.operation_name, "GetAllProjects");
        assert_eq!(request.variables, json!({}));
    }

    #[tokio::test]
    async fn test_create_project_sends_data_variable() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_data(json!({ "createProject": project_json(5, "Default Project") }));

        let input = ProjectDraft::default().to_input();
        let project = service(&transport).create_project(&input).await.unwrap();
        assert_eq!(project.id, 5);

        let requests = transport.requests();
        let request = &requests[0];
        assert_eq!(request.operation_name, "CreateProject");
        assert!(request.query.contains("createProject(data: $data)"));
        assert_eq!(
            request.variables,
            json!({
                "data": {
                    "name": "Default Project",
                    "description": "Default description",
                    "related_person": "Default Person",
                    "status": "active",
                    "time_spent": 10,
                    "time_remain": 10,
                    "tags": "frontend,urgent"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_create_project_error_message() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_errors(&["name is taken", "status is invalid"]);

        let err = service(&transport)
            .create_project(&ProjectDraft::default().to_input())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "name is taken, status is invalid");
    }
}
