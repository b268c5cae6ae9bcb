//! Resident project proposals.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::identifiers::ProjectId;
use super::selection::{Selection, ToggleOutcome};
use super::tag::{Tone, define_tag};
use super::user::Member;

define_tag! {
    /// Subject area of a project.
    pub enum ProjectCategory ("project category") {
        Environment => "environment",
        Infrastructure => "infrastructure",
        Social => "social",
        Education => "education",
        Health => "health",
        Culture => "culture",
        Sports => "sports",
        Technology => "technology",
    }
}

impl ProjectCategory {
    /// Display label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Environment => "Environment",
            Self::Infrastructure => "Infrastructure",
            Self::Social => "Social",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Culture => "Culture",
            Self::Sports => "Sports",
            Self::Technology => "Technology",
        }
    }

    /// Colour family for the category.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Environment => Tone::Green,
            Self::Infrastructure => Tone::Blue,
            Self::Social => Tone::Pink,
            Self::Education => Tone::Purple,
            Self::Health => Tone::Red,
            Self::Culture => Tone::Indigo,
            Self::Sports | Self::Technology => Tone::Gray,
        }
    }
}

define_tag! {
    /// Lifecycle stage of a project.
    ///
    /// Projects move `proposed → approved → in_progress → completed`, or end
    /// as `cancelled`.
    pub enum ProjectStatus ("project status") {
        Proposed => "proposed",
        Approved => "approved",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl ProjectStatus {
    /// Display label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Proposed => "Proposed",
            Self::Approved => "Approved",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Colour family for the status.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Proposed => Tone::Yellow,
            Self::Approved => Tone::Green,
            Self::InProgress => Tone::Blue,
            Self::Completed => Tone::Purple,
            Self::Cancelled => Tone::Red,
        }
    }
}

/// A resident-submitted improvement proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub author: Member,
    /// Net votes; may drop below zero when vote state is inconsistent.
    pub votes: i64,
    pub status: ProjectStatus,
    pub participants: Vec<Member>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_points: Option<u32>,
}

impl Project {
    /// Toggle the member's vote on this project.
    ///
    /// Adds the project to `votes` and increments the counter, or removes it
    /// and decrements. Applying the toggle twice restores both.
    pub fn toggle_vote(&mut self, votes: &mut Selection<ProjectId>) -> ToggleOutcome {
        votes.toggle_counted(&self.id, &mut self.votes)
    }
}
