//! Member notifications and the feed's read state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::identifiers::{NotificationId, UserId};
use super::tag::define_tag;

/// Unread counts above this value render as `9+`.
const BADGE_CAP: usize = 9;

define_tag! {
    /// Event that produced a notification.
    pub enum NotificationType ("notification type") {
        ProjectVote => "project_vote",
        ChallengeCompleted => "challenge_completed",
        BadgeEarned => "badge_earned",
        LevelUp => "level_up",
        ForumReply => "forum_reply",
        ProjectApproved => "project_approved",
        RewardAvailable => "reward_available",
    }
}

impl NotificationType {
    /// Icon key rendered next to the notification.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::ProjectVote => "ballot",
            Self::ChallengeCompleted => "megaphone",
            Self::BadgeEarned => "trophy",
            Self::LevelUp => "star",
            Self::ForumReply => "speech_bubble",
            Self::ProjectApproved => "check_mark",
            Self::RewardAvailable => "gift",
        }
    }
}

/// A message addressed to one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    /// Id of the project, challenge, or post the notification concerns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
}

/// Ordered list of a member's notifications.
///
/// # Examples
/// ```
/// use engage_local::domain::NotificationFeed;
///
/// let feed = NotificationFeed::default();
/// assert_eq!(feed.unread_count(), 0);
/// assert_eq!(feed.unread_badge(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
}

impl NotificationFeed {
    /// Build a feed from notifications in display order.
    #[must_use]
    pub fn new(entries: Vec<Notification>) -> Self {
        Self { entries }
    }

    /// Notifications in display order.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Consume the feed, returning its notifications.
    #[must_use]
    pub fn into_entries(self) -> Vec<Notification> {
        self.entries
    }

    /// Mark one notification read. Unknown ids are ignored.
    pub fn mark_read(&mut self, id: &NotificationId) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| &entry.id == id) {
            entry.is_read = true;
        }
    }

    /// Mark every notification read.
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.is_read = true;
        }
    }

    /// Remove a notification from the feed, returning it when present.
    pub fn remove(&mut self, id: &NotificationId) -> Option<Notification> {
        let index = self.entries.iter().position(|entry| &entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_read).count()
    }

    /// Badge text for the unread count: `None` when nothing is unread,
    /// `9+` above nine.
    #[must_use]
    pub fn unread_badge(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            count if count > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
            count => Some(count.to_string()),
        }
    }
}
