//! Seed record types.
//!
//! These records mirror the backend's domain entities without depending on
//! them. Tags (categories, statuses, roles) stay as plain strings here; the
//! backend parses them into closed enums when converting seeds into domain
//! values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An example community member.
///
/// # Example
///
/// ```
/// use example_data::UserSeed;
///
/// let json = r#"{
///     "id": "1",
///     "name": "Maria Silva",
///     "email": "maria@example.com",
///     "level": 5,
///     "points": 1250,
///     "badgeIds": [],
///     "joinedAt": "2024-01-15T00:00:00Z",
///     "role": "resident"
/// }"#;
/// let user: UserSeed = serde_json::from_str(json).expect("valid user seed");
/// assert_eq!(user.name, "Maria Silva");
/// assert!(user.avatar.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserSeed {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub level: u32,
    pub points: u32,
    /// Identifiers into [`crate::Dataset::badges`].
    #[serde(default)]
    pub badge_ids: Vec<String>,
    pub joined_at: DateTime<Utc>,
    /// One of `resident`, `ngo`, `company`, `government`.
    pub role: String,
}

/// An achievement definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct BadgeSeed {
    pub id: String,
    pub name: String,
    pub description: String,
    pub requirements: String,
    /// One of `common`, `rare`, `epic`, `legendary`.
    pub rarity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// A resident-submitted project proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ProjectSeed {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub author_id: String,
    pub votes: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub participant_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_points: Option<u32>,
}

/// A gamified challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ChallengeSeed {
    pub id: String,
    pub title: String,
    pub description: String,
    /// One of `individual`, `team`, `community`.
    #[serde(rename = "type")]
    pub kind: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub completed_by: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// A reply attached to a forum post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ForumReplySeed {
    pub id: String,
    pub content: String,
    pub author_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<String>,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A forum discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ForumPostSeed {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub category: String,
    #[serde(default)]
    pub replies: Vec<ForumReplySeed>,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_pinned: bool,
}

/// A feed entry addressed to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct NotificationSeed {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
}
