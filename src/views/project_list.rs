//! Project list view
//!
//! Loads every project and exposes the result as a [`ListState`]. Observers
//! subscribe to state changes and re-render from the latest value.

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use super::project_card::{render_card, KanbanCardProps, Milestones};
use crate::models::Project;
use crate::services::{FetchPolicy, ProjectService};

pub const AVATAR_PLACEHOLDER: &str = "/images/user/user-23.jpg";
pub const LOADING_TEXT: &str = "Loading projects...";
pub const EMPTY_TEXT: &str = "No projects found.";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: i64,
    pub props: KanbanCardProps,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Error(String),
    Empty,
    Loaded(Vec<ProjectCard>),
}

impl ListState {
    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            ListState::Loaded(cards) => cards,
            _ => &[],
        }
    }
}

pub struct ProjectListView {
    service: ProjectService,
    state: watch::Sender<ListState>,
}

impl ProjectListView {
    /// A freshly mounted list is loading until the first response arrives.
    pub fn new(service: ProjectService) -> Self {
        let (state, _) = watch::channel(ListState::Loading);
        Self { service, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Load projects, answering from the cache when possible.
    pub async fn load(&self) {
        self.fetch(FetchPolicy::CacheFirst).await;
    }

    /// Reload projects from the network.
    pub async fn refetch(&self) {
        self.fetch(FetchPolicy::NetworkOnly).await;
    }

    pub fn render(&self) -> String {
        render_list(&self.state.borrow())
    }

    async fn fetch(&self, policy: FetchPolicy) {
        self.state.send_replace(ListState::Loading);

        let next = match self.service.get_all_projects(policy).await {
            Ok(projects) if projects.is_empty() => ListState::Empty,
            Ok(projects) => ListState::Loaded(
                projects
                    .iter()
                    .map(|p| ProjectCard {
                        id: p.id,
                        props: card_props(p),
                    })
                    .collect(),
            ),
            Err(e) => {
                warn!("Failed to load projects: {}", e);
                ListState::Error(e.to_string())
            }
        };

        debug!("Project list state: {}", state_label(&next));
        self.state.send_replace(next);
    }
}

/// Render whichever single state is current.
pub fn render_list(state: &ListState) -> String {
    match state {
        ListState::Loading => format!("{}\n", LOADING_TEXT),
        ListState::Error(message) => format!("Error: {}\n", message),
        ListState::Empty => format!("{}\n", EMPTY_TEXT),
        ListState::Loaded(cards) => cards
            .iter()
            .map(|c| render_card(&c.props))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Map a project record to card props.
///
/// Rating, tasks and milestones have no backing data and stay at zero.
pub fn card_props(project: &Project) -> KanbanCardProps {
    KanbanCardProps {
        title: project.name.clone(),
        partner: project.related_person.clone(),
        date_start: format_day(&project.created_at),
        date_end: format_day(&project.updated_at),
        rating: 0,
        tasks: 0,
        milestones: Milestones::default(),
        remaining: format_hours(project.time_remain),
        avatar_url: AVATAR_PLACEHOLDER.to_string(),
        is_favorite: false,
    }
}

/// Abbreviated month and day, e.g. `Oct 6`. Rendered in UTC, without a year.
pub fn format_day(at: &DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

/// Hour count without unit; whole numbers drop the fraction.
pub fn format_hours(hours: f64) -> String {
    if hours == 0.0 {
        // keeps -0 from printing as "-0"
        return "0".to_string();
    }
    hours.to_string()
}

fn state_label(state: &ListState) -> String {
    match state {
        ListState::Loading => "loading".to_string(),
        ListState::Error(_) => "error".to_string(),
        ListState::Empty => "empty".to_string(),
        ListState::Loaded(cards) => format!("{} cards", cards.len()),
    }
}
