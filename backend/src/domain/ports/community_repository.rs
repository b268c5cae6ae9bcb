//! Driven port for reading community records.
//!
//! Adapters hand back fully converted domain entities; the domain never sees
//! storage formats.

use async_trait::async_trait;

use crate::domain::{Challenge, ForumPost, Notification, Project, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by community record adapters.
    pub enum CommunityRepositoryError {
        /// The backing store could not be reached.
        Unavailable { message: String } => "community store unavailable: {message}",
        /// A stored record could not be converted into a domain entity.
        InvalidRecord { message: String } => "community record invalid: {message}",
    }
}

/// Read access to users, projects, challenges, forum threads, and
/// notifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// All members in registration order.
    async fn list_users(&self) -> Result<Vec<User>, CommunityRepositoryError>;

    /// Look up one member.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, CommunityRepositoryError>;

    /// All project proposals in stored order.
    async fn list_projects(&self) -> Result<Vec<Project>, CommunityRepositoryError>;

    /// All challenges in stored order.
    async fn list_challenges(&self) -> Result<Vec<Challenge>, CommunityRepositoryError>;

    /// All forum threads in stored order.
    async fn list_forum_posts(&self) -> Result<Vec<ForumPost>, CommunityRepositoryError>;

    /// Notifications addressed to `user`, in stored order.
    async fn notifications_for(
        &self,
        user: &UserId,
    ) -> Result<Vec<Notification>, CommunityRepositoryError>;
}

/// Repository holding no records.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCommunityRepository;

#[async_trait]
impl CommunityRepository for FixtureCommunityRepository {
    async fn list_users(&self) -> Result<Vec<User>, CommunityRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_user(&self, _id: &UserId) -> Result<Option<User>, CommunityRepositoryError> {
        Ok(None)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, CommunityRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_challenges(&self) -> Result<Vec<Challenge>, CommunityRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_forum_posts(&self) -> Result<Vec<ForumPost>, CommunityRepositoryError> {
        Ok(Vec::new())
    }

    async fn notifications_for(
        &self,
        _user: &UserId,
    ) -> Result<Vec<Notification>, CommunityRepositoryError> {
        Ok(Vec::new())
    }
}
