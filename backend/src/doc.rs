//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers every HTTP endpoint from the
//! inbound layer (service banner, placeholders, community views, health) and
//! the domain schemas they return.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{
    Badge, BadgeRarity, Challenge, ChallengeType, Error, ErrorCode, ForumCategory, ForumPost,
    ForumReply, LevelProgress, Member, MemberStats, Notification, NotificationType, Project,
    ProjectCategory, ProjectStatus, Tone, User, UserRole,
};
use crate::inbound::http::community::{
    ChallengeView, ForumPostView, NotificationFeedBody, NotificationView, ProjectView,
};
use crate::inbound::http::health::{HealthReport, MemoryUsage};
use crate::inbound::http::root::{PlaceholderListing, ServiceBanner};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Engage Local API",
        description = "Civic engagement read views over the community dataset, plus health probes.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::index,
        crate::inbound::http::root::placeholder_projects,
        crate::inbound::http::root::placeholder_challenges,
        crate::inbound::http::root::placeholder_users,
        crate::inbound::http::community::list_projects,
        crate::inbound::http::community::list_challenges,
        crate::inbound::http::community::list_forum_posts,
        crate::inbound::http::community::user_progress,
        crate::inbound::http::community::user_stats,
        crate::inbound::http::community::user_notifications,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        Member,
        UserRole,
        Badge,
        BadgeRarity,
        Project,
        ProjectCategory,
        ProjectStatus,
        Challenge,
        ChallengeType,
        ForumPost,
        ForumReply,
        ForumCategory,
        Notification,
        NotificationType,
        LevelProgress,
        MemberStats,
        Tone,
        ProjectView,
        ChallengeView,
        ForumPostView,
        NotificationView,
        NotificationFeedBody,
        HealthReport,
        MemoryUsage,
        ServiceBanner,
        PlaceholderListing,
    )),
    tags(
        (name = "meta", description = "Service banner"),
        (name = "placeholders", description = "Listings reserved for future persistence"),
        (name = "community", description = "Projects, challenges, forum threads, and member views"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
