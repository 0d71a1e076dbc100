use serde::{Deserialize, Serialize};

use super::project::{CreateProjectInput, ProjectStatus};

pub const DEFAULT_NAME: &str = "Default Project";
pub const DEFAULT_DESCRIPTION: &str = "Default description";
pub const DEFAULT_RELATED_PERSON: &str = "Default Person";
pub const DEFAULT_HOURS: f64 = 10.0;
pub const DEFAULT_TAGS: &str = "frontend,urgent";

/// Uncommitted values of the create-project form.
///
/// Numeric fields are `None` when the input box is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub related_person: String,
    pub status: ProjectStatus,
    pub time_spent: Option<f64>,
    pub time_remain: Option<f64>,
    pub tags: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            related_person: DEFAULT_RELATED_PERSON.to_string(),
            status: ProjectStatus::Active,
            time_spent: Some(DEFAULT_HOURS),
            time_remain: Some(DEFAULT_HOURS),
            tags: DEFAULT_TAGS.to_string(),
        }
    }
}

impl ProjectDraft {
    /// Build the mutation payload. Empty hours become `0`, an empty
    /// description or tag string becomes `null`.
    pub fn to_input(&self) -> CreateProjectInput {
        CreateProjectInput {
            name: self.name.clone(),
            description: non_empty(&self.description),
            related_person: self.related_person.clone(),
            status: self.status,
            time_spent: self.time_spent.unwrap_or(0.0),
            time_remain: self.time_remain.unwrap_or(0.0),
            tags: non_empty(&self.tags),
        }
    }
}

/// Interpret the raw text of a number input. Empty or unparsable text
/// leaves the field empty, like a browser number box.
pub fn parse_hours(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
