//! Community members.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::badge::Badge;
use super::engagement::{LevelProgress, level_progress, points_to_next_level};
use super::identifiers::UserId;
use super::tag::define_tag;

define_tag! {
    /// Kind of community member.
    pub enum UserRole ("role") {
        Resident => "resident",
        Ngo => "ngo",
        Company => "company",
        Government => "government",
    }
}

impl UserRole {
    /// Display label for the role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resident => "Resident",
            Self::Ngo => "NGO",
            Self::Company => "Company",
            Self::Government => "Government",
        }
    }
}

/// A registered community member.
///
/// `level` is expected to follow `points` (see
/// [`level_for_points`](super::engagement::level_for_points)), but records
/// are not rejected when it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub level: u32,
    pub points: u32,
    pub badges: Vec<Badge>,
    pub joined_at: DateTime<Utc>,
    pub role: UserRole,
}

impl User {
    /// Percentage progress through the current level band.
    #[must_use]
    pub fn level_progress(&self) -> f64 {
        level_progress(self.level, self.points)
    }

    /// Points still needed to reach the next level.
    #[must_use]
    pub fn points_to_next_level(&self) -> i64 {
        points_to_next_level(self.level, self.points)
    }

    /// Progress summary for the member.
    #[must_use]
    pub fn progress(&self) -> LevelProgress {
        LevelProgress::new(self.level, self.points)
    }

    /// Compact reference used when the member authors or joins something.
    #[must_use]
    pub fn as_member(&self) -> Member {
        Member {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            role: self.role,
        }
    }
}

/// Reference to a member embedded in projects and forum records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: UserRole,
}
