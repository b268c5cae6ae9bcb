//! Driving port for the community read views.
//!
//! Inbound adapters call this port with parsed filter criteria and receive
//! domain values ready to serialise.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    Challenge, ChallengeFilter, Error, Filtered, ForumFilter, ForumPost, LevelProgress,
    MemberStats, NotificationFeed, Project, ProjectFilter, UserId,
};

/// Use-case port for browsing the community dataset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommunityQuery: Send + Sync {
    /// Projects matching `filter`, in stored order.
    async fn projects(&self, filter: &ProjectFilter) -> Result<Filtered<Project>, Error>;

    /// Challenges matching `filter` with windows evaluated at `now`.
    async fn challenges(
        &self,
        filter: &ChallengeFilter,
        now: DateTime<Utc>,
    ) -> Result<Filtered<Challenge>, Error>;

    /// Forum threads matching `filter`, pinned first then newest first.
    async fn forum_posts(&self, filter: &ForumFilter) -> Result<Filtered<ForumPost>, Error>;

    /// Level summary for a member; [`ErrorCode::NotFound`] for unknown ids.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn user_progress(&self, user: &UserId) -> Result<LevelProgress, Error>;

    /// Activity counts for a member, with open challenges counted at `now`;
    /// [`ErrorCode::NotFound`] for unknown ids.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn member_stats(&self, user: &UserId, now: DateTime<Utc>)
    -> Result<MemberStats, Error>;

    /// A member's notification feed; [`ErrorCode::NotFound`] for unknown ids.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn notification_feed(&self, user: &UserId) -> Result<NotificationFeed, Error>;
}
