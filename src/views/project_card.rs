//! Kanban card for one project

use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Milestones {
    pub done: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanCardProps {
    pub title: String,
    pub partner: String,
    pub date_start: String,
    pub date_end: String,
    pub rating: u8,
    pub tasks: u32,
    pub milestones: Milestones,
    pub remaining: String,
    pub avatar_url: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Render a card as text. Output depends on nothing but `props`.
pub fn render_card(props: &KanbanCardProps) -> String {
    let star = if props.is_favorite { "[*]" } else { "[ ]" };
    let rating = props.rating.min(MAX_RATING);

    format!(
        "{} {}\n    Partner:  {}\n    Dates:    {} -> {}\n    Rating:   {} / {}\n    \
         {} Tasks | Milestones {}/{} | Remaining [{}] | Avatar {}\n",
        star,
        props.title,
        props.partner,
        props.date_start,
        props.date_end,
        rating,
        MAX_RATING,
        props.tasks,
        props.milestones.done,
        props.milestones.total,
        props.remaining,
        props.avatar_url,
    )
}
