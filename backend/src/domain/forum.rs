//! Forum threads and replies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::identifiers::{ForumPostId, ForumReplyId};
use super::selection::{Selection, ToggleOutcome};
use super::tag::{Tone, define_tag};
use super::user::Member;

define_tag! {
    /// Board a thread is posted to.
    pub enum ForumCategory ("forum category") {
        General => "general",
        ProjectDiscussion => "project_discussion",
        Help => "help",
        Announcements => "announcements",
        Feedback => "feedback",
    }
}

impl ForumCategory {
    /// Display label for the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::ProjectDiscussion => "Projects",
            Self::Help => "Help",
            Self::Announcements => "Announcements",
            Self::Feedback => "Feedback",
        }
    }

    /// Colour family for the board.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::General => Tone::Blue,
            Self::ProjectDiscussion => Tone::Green,
            Self::Help => Tone::Yellow,
            Self::Announcements => Tone::Purple,
            Self::Feedback => Tone::Pink,
        }
    }
}

/// A reply within a thread, optionally answering another reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumReply {
    pub id: ForumReplyId,
    pub content: String,
    pub author: Member,
    pub post_id: ForumPostId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<ForumReplyId>,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: ForumPostId,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub author: Member,
    pub replies: Vec<ForumReply>,
    pub likes: i64,
    pub is_pinned: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ForumPost {
    /// Like or unlike the thread for the member owning `likes`.
    pub fn toggle_like(&mut self, likes: &mut Selection<ForumPostId>) -> ToggleOutcome {
        likes.toggle_counted(&self.id, &mut self.likes)
    }

    /// Replies answering the thread directly rather than another reply.
    pub fn top_level_replies(&self) -> impl Iterator<Item = &ForumReply> {
        self.replies
            .iter()
            .filter(|reply| reply.parent_reply_id.is_none())
    }
}
