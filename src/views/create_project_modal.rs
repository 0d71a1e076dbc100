//! Create-project dialog
//!
//! Holds the form draft while open and submits it as a `CreateProject`
//! mutation. A successful submission resets the draft to its defaults and
//! closes the dialog; a failed one keeps the dialog open with the draft
//! untouched so the user can retry.

use tracing::{debug, error};

use crate::error::ClientError;
use crate::models::{parse_hours, Project, ProjectDraft, ProjectStatus};
use crate::services::ProjectService;

pub const DIALOG_TITLE: &str = "Create a Project";

/// Invoked every time the dialog closes.
pub type CloseCallback = Box<dyn FnMut() + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ModalError {
    #[error("The create dialog is not open")]
    Closed,

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub struct CreateProjectModal {
    service: ProjectService,
    open: bool,
    draft: ProjectDraft,
    submitting: bool,
    error: Option<String>,
    on_close: Option<CloseCallback>,
}

impl CreateProjectModal {
    pub fn new(service: ProjectService) -> Self {
        Self {
            service,
            open: false,
            draft: ProjectDraft::default(),
            submitting: false,
            error: None,
            on_close: None,
        }
    }

    pub fn with_on_close(mut self, callback: CloseCallback) -> Self {
        self.on_close = Some(callback);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// Message of the last failed submission, shown under the actions.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close through the Discard action. The draft is kept.
    pub fn discard(&mut self) {
        self.close();
    }

    /// Close by dismissing the dialog surface. The draft is kept.
    pub fn dismiss(&mut self) {
        self.close();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_related_person(&mut self, person: impl Into<String>) {
        self.draft.related_person = person.into();
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        self.draft.status = status;
    }

    /// Takes the raw text of the number box; empty text empties the field.
    pub fn set_time_spent(&mut self, raw: &str) {
        self.draft.time_spent = parse_hours(raw);
    }

    pub fn set_time_remain(&mut self, raw: &str) {
        self.draft.time_remain = parse_hours(raw);
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.draft.tags = tags.into();
    }

    /// Submit the draft.
    ///
    /// The exclusive borrow keeps a second submission from starting while
    /// one is in flight.
    pub async fn submit(&mut self) -> Result<Project, ModalError> {
        if !self.open {
            return Err(ModalError::Closed);
        }

        let input = self.draft.to_input();
        debug!("Submitting project '{}'", input.name);

        let result = {
            let _submitting = SubmittingGuard::set(&mut self.submitting);
            self.service.create_project(&input).await
        };

        match result {
            Ok(project) => {
                self.draft = ProjectDraft::default();
                self.error = None;
                self.close();
                Ok(project)
            }
            Err(e) => {
                error!("Failed to create project: {}", e);
                self.error = Some(e.to_string());
                Err(ModalError::Client(e))
            }
        }
    }

    /// Text rendering of the open dialog; a closed dialog renders nothing.
    pub fn render(&self) -> String {
        if !self.open {
            return String::new();
        }

        let d = &self.draft;
        let hours = |v: Option<f64>| v.map(|h| h.to_string()).unwrap_or_default();
        let statuses: Vec<String> = ProjectStatus::ALL
            .iter()
            .map(|s| {
                if *s == d.status {
                    format!("({})", s)
                } else {
                    s.to_string()
                }
            })
            .collect();

        let submit = if self.submitting { "Creating..." } else { "Create project" };
        let mut out = format!(
            "== {} ==\n\
             Name:                  {}\n\
             Related person:        {}\n\
             Description:           {}\n\
             Status:                {}\n\
             Time spent (h):        {}\n\
             Time remain (h):       {}\n\
             Tags (comma separated): {}\n",
            DIALOG_TITLE,
            d.name,
            d.related_person,
            d.description,
            statuses.join(" | "),
            hours(d.time_spent),
            hours(d.time_remain),
            d.tags,
        );
        out.push_str("[ ] Timesheets - Log time on tasks\n");
        out.push_str("[ ] Billable - Invoice your time and material to customers\n");
        out.push_str(&format!("<{}>  <Discard>\n", submit));
        if let Some(message) = &self.error {
            out.push_str(&format!("Error: {}\n", message));
        }
        out
    }

    fn close(&mut self) {
        self.open = false;
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }
}

/// Clears the in-flight flag when the submission finishes or is dropped.
struct SubmittingGuard<'a>(&'a mut bool);

impl<'a> SubmittingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
