//! Community read service.
//!
//! Implements [`CommunityQuery`] over any [`CommunityRepository`]. Time-based
//! rules take the instant from the caller, so one request sees one clock
//! reading.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::ports::{CommunityQuery, CommunityRepository, CommunityRepositoryError};
use crate::domain::{
    Challenge, ChallengeFilter, Error, Filtered, ForumFilter, ForumPost, LevelProgress,
    MemberStats, NotificationFeed, Project, ProjectFilter, User, UserId,
};

/// Domain service answering the community read views.
#[derive(Clone)]
pub struct CommunityService<R> {
    repository: Arc<R>,
}

impl<R> CommunityService<R> {
    /// Create a service reading from `repository`.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CommunityService<R>
where
    R: CommunityRepository,
{
    async fn require_user(&self, id: &UserId) -> Result<User, Error> {
        self.repository
            .find_user(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }
}

fn map_repository_error(error: CommunityRepositoryError) -> Error {
    warn!(%error, "community repository failed");
    match error {
        CommunityRepositoryError::Unavailable { message } => {
            Error::internal(format!("community store unavailable: {message}"))
        }
        CommunityRepositoryError::InvalidRecord { message } => {
            Error::internal(format!("community record invalid: {message}"))
        }
    }
}

#[async_trait]
impl<R> CommunityQuery for CommunityService<R>
where
    R: CommunityRepository,
{
    async fn projects(&self, filter: &ProjectFilter) -> Result<Filtered<Project>, Error> {
        let projects = self
            .repository
            .list_projects()
            .await
            .map_err(map_repository_error)?;
        Ok(filter.apply(&projects))
    }

    async fn challenges(
        &self,
        filter: &ChallengeFilter,
        now: DateTime<Utc>,
    ) -> Result<Filtered<Challenge>, Error> {
        let challenges = self
            .repository
            .list_challenges()
            .await
            .map_err(map_repository_error)?;
        Ok(filter.apply(&challenges, now))
    }

    async fn forum_posts(&self, filter: &ForumFilter) -> Result<Filtered<ForumPost>, Error> {
        let posts = self
            .repository
            .list_forum_posts()
            .await
            .map_err(map_repository_error)?;
        Ok(filter.apply(&posts))
    }

    async fn user_progress(&self, user: &UserId) -> Result<LevelProgress, Error> {
        Ok(self.require_user(user).await?.progress())
    }

    async fn member_stats(
        &self,
        user: &UserId,
        now: DateTime<Utc>,
    ) -> Result<MemberStats, Error> {
        self.require_user(user).await?;
        let projects = self
            .repository
            .list_projects()
            .await
            .map_err(map_repository_error)?;
        let challenges = self
            .repository
            .list_challenges()
            .await
            .map_err(map_repository_error)?;
        Ok(MemberStats::compute(user, &projects, &challenges, now))
    }

    async fn notification_feed(&self, user: &UserId) -> Result<NotificationFeed, Error> {
        self.require_user(user).await?;
        let entries = self
            .repository
            .notifications_for(user)
            .await
            .map_err(map_repository_error)?;
        Ok(NotificationFeed::new(entries))
    }
}

#[cfg(test)]
#[path = "community_service_tests.rs"]
mod tests;
