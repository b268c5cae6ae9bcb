//! Read-only community views over the loaded dataset.
//!
//! ```text
//! GET /api/v1/projects?search=&category=&status=
//! GET /api/v1/challenges?type=&window=
//! GET /api/v1/forum/posts?search=&category=
//! GET /api/v1/users/{id}/progress
//! GET /api/v1/users/{id}/stats
//! GET /api/v1/users/{id}/notifications
//! ```
//!
//! Query values are parsed into filter value objects before the port is
//! called; unknown tags answer 400 with the offending field in `details`.
//! Each record is decorated with its display label and tone.

use actix_web::{HttpResponse, get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Challenge, ChallengeFilter, Error, ForumFilter, ForumPost, LevelProgress, MemberStats,
    Notification, NotificationFeed, Project, ProjectFilter, SearchTerm, Tone, relative_age,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_tag, parse_user_id};

/// Query parameters for the project list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectsQuery {
    /// Case-insensitive text matched against title, description, and tags.
    pub search: Option<String>,
    /// Project category or `all`.
    pub category: Option<String>,
    /// Project status or `all`.
    pub status: Option<String>,
}

impl ProjectsQuery {
    fn into_filter(self) -> Result<ProjectFilter, Error> {
        Ok(ProjectFilter {
            search: SearchTerm::new(self.search.as_deref().unwrap_or_default()),
            category: parse_tag(self.category.as_deref(), FieldName::new("category"))?,
            status: parse_tag(self.status.as_deref(), FieldName::new("status"))?,
        })
    }
}

/// Query parameters for the challenge list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChallengesQuery {
    /// Challenge type or `all`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// One of `all`, `active`, `ending_soon`, `completed`.
    pub window: Option<String>,
}

impl ChallengesQuery {
    fn into_filter(self) -> Result<ChallengeFilter, Error> {
        Ok(ChallengeFilter {
            kind: parse_tag(self.kind.as_deref(), FieldName::new("type"))?,
            window: parse_tag(self.window.as_deref(), FieldName::new("window"))?,
        })
    }
}

/// Query parameters for the forum thread list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForumPostsQuery {
    /// Case-insensitive text matched against title, content, tags, and
    /// author name.
    pub search: Option<String>,
    /// Forum category or `all`.
    pub category: Option<String>,
}

impl ForumPostsQuery {
    fn into_filter(self) -> Result<ForumFilter, Error> {
        Ok(ForumFilter {
            search: SearchTerm::new(self.search.as_deref().unwrap_or_default()),
            category: parse_tag(self.category.as_deref(), FieldName::new("category"))?,
        })
    }
}

/// A project with its presentation lookups resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub category_label: &'static str,
    pub category_tone: Tone,
    pub status_label: &'static str,
    pub status_tone: Tone,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            category_label: project.category.label(),
            category_tone: project.category.tone(),
            status_label: project.status.label(),
            status_tone: project.status.tone(),
            project,
        }
    }
}

/// A challenge with presentation lookups and time state at request time.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeView {
    #[serde(flatten)]
    pub challenge: Challenge,
    pub type_label: &'static str,
    pub type_tone: Tone,
    /// Whole days until the deadline, rounded up; absent without one.
    pub days_left: Option<i64>,
    pub is_expired: bool,
}

impl ChallengeView {
    fn at(challenge: Challenge, now: DateTime<Utc>) -> Self {
        Self {
            type_label: challenge.kind.label(),
            type_tone: challenge.kind.tone(),
            days_left: challenge.days_left(now),
            is_expired: challenge.is_expired(now),
            challenge,
        }
    }
}

/// A forum thread with presentation lookups and a coarse age.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumPostView {
    #[serde(flatten)]
    pub post: ForumPost,
    pub category_label: &'static str,
    pub category_tone: Tone,
    #[schema(example = "2d")]
    pub age: String,
}

impl ForumPostView {
    fn at(post: ForumPost, now: DateTime<Utc>) -> Self {
        Self {
            category_label: post.category.label(),
            category_tone: post.category.tone(),
            age: relative_age(post.created_at, now).to_string(),
            post,
        }
    }
}

/// A notification with its icon key and a coarse age.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    #[serde(flatten)]
    pub notification: Notification,
    #[schema(example = "ballot")]
    pub icon: &'static str,
    #[schema(example = "5min")]
    pub age: String,
}

/// List envelope shared by the collection views.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    /// Number of records that passed the filter.
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> Listing<T> {
    fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A member's notification feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeedBody {
    pub unread_count: usize,
    /// Compact badge text; absent when everything is read.
    #[schema(example = "9+")]
    pub unread_badge: Option<String>,
    pub notifications: Vec<NotificationView>,
}

impl NotificationFeedBody {
    fn at(feed: NotificationFeed, now: DateTime<Utc>) -> Self {
        Self {
            unread_count: feed.unread_count(),
            unread_badge: feed.unread_badge(),
            notifications: feed
                .into_entries()
                .into_iter()
                .map(|notification| NotificationView {
                    icon: notification.kind.icon(),
                    age: relative_age(notification.created_at, now).to_string(),
                    notification,
                })
                .collect(),
        }
    }
}

/// List project proposals.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    params(ProjectsQuery),
    responses(
        (status = 200, description = "Matching projects", body = Listing<ProjectView>),
        (status = 400, description = "Unknown category or status", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["community"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<HttpState>,
    query: web::Query<ProjectsQuery>,
) -> ApiResult<HttpResponse> {
    let filter = query.into_inner().into_filter()?;
    let projects = state.community.projects(&filter).await?;
    let body = Listing::new(
        projects
            .into_items()
            .into_iter()
            .map(ProjectView::from)
            .collect(),
    );
    Ok(HttpResponse::Ok().json(body))
}

/// List challenges.
#[utoipa::path(
    get,
    path = "/api/v1/challenges",
    params(ChallengesQuery),
    responses(
        (status = 200, description = "Matching challenges", body = Listing<ChallengeView>),
        (status = 400, description = "Unknown type or window", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["community"],
    operation_id = "listChallenges"
)]
#[get("/challenges")]
pub async fn list_challenges(
    state: web::Data<HttpState>,
    query: web::Query<ChallengesQuery>,
) -> ApiResult<HttpResponse> {
    let filter = query.into_inner().into_filter()?;
    let now = state.clock.utc();
    let challenges = state.community.challenges(&filter, now).await?;
    let body = Listing::new(
        challenges
            .into_items()
            .into_iter()
            .map(|challenge| ChallengeView::at(challenge, now))
            .collect(),
    );
    Ok(HttpResponse::Ok().json(body))
}

/// List forum threads, pinned first then newest first.
#[utoipa::path(
    get,
    path = "/api/v1/forum/posts",
    params(ForumPostsQuery),
    responses(
        (status = 200, description = "Matching threads", body = Listing<ForumPostView>),
        (status = 400, description = "Unknown category", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["community"],
    operation_id = "listForumPosts"
)]
#[get("/forum/posts")]
pub async fn list_forum_posts(
    state: web::Data<HttpState>,
    query: web::Query<ForumPostsQuery>,
) -> ApiResult<HttpResponse> {
    let filter = query.into_inner().into_filter()?;
    let posts = state.community.forum_posts(&filter).await?;
    let now = state.clock.utc();
    let body = Listing::new(
        posts
            .into_items()
            .into_iter()
            .map(|post| ForumPostView::at(post, now))
            .collect(),
    );
    Ok(HttpResponse::Ok().json(body))
}

/// Level progress for one member.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/progress",
    params(("id" = String, Path, description = "Member identifier")),
    responses(
        (status = 200, description = "Level summary", body = LevelProgress),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown member", body = Error)
    ),
    tags = ["community"],
    operation_id = "getUserProgress"
)]
#[get("/users/{id}/progress")]
pub async fn user_progress(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner(), FieldName::new("id"))?;
    let progress = state.community.user_progress(&user_id).await?;
    Ok(HttpResponse::Ok().json(progress))
}

/// Activity counts for one member.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/stats",
    params(("id" = String, Path, description = "Member identifier")),
    responses(
        (status = 200, description = "Activity counts", body = MemberStats),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown member", body = Error)
    ),
    tags = ["community"],
    operation_id = "getUserStats"
)]
#[get("/users/{id}/stats")]
pub async fn user_stats(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner(), FieldName::new("id"))?;
    let stats = state
        .community
        .member_stats(&user_id, state.clock.utc())
        .await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Notification feed for one member.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/notifications",
    params(("id" = String, Path, description = "Member identifier")),
    responses(
        (status = 200, description = "Notification feed", body = NotificationFeedBody),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown member", body = Error)
    ),
    tags = ["community"],
    operation_id = "getUserNotifications"
)]
#[get("/users/{id}/notifications")]
pub async fn user_notifications(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner(), FieldName::new("id"))?;
    let feed = state.community.notification_feed(&user_id).await?;
    Ok(HttpResponse::Ok().json(NotificationFeedBody::at(feed, state.clock.utc())))
}

#[cfg(test)]
#[path = "community_tests.rs"]
mod tests;
