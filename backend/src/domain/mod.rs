//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed community model served by the API and
//! the rules that operate on it. Inbound adapters parse raw input into these
//! types; outbound adapters convert stored records into them.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - User, Project, Challenge, ForumPost, Notification: community entities.
//! - ProjectFilter, ChallengeFilter, ForumFilter: list view criteria.
//! - Selection: per-user toggle sets for votes, likes, and joins.
//! - CommunityService: implementation of the `CommunityQuery` driving port.

mod badge;
mod challenge;
mod community_service;
mod engagement;
pub mod error;
mod filters;
mod forum;
mod identifiers;
mod notification;
pub mod ports;
mod project;
mod selection;
mod tag;
mod trace_id;
mod user;

pub use self::badge::{Badge, BadgeRarity};
pub use self::challenge::{Challenge, ChallengeType};
pub use self::community_service::CommunityService;
pub use self::engagement::{
    LevelProgress, MemberStats, POINTS_PER_LEVEL, RelativeAge, level_for_points, level_progress,
    points_to_next_level, relative_age,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filters::{
    ALL, ChallengeFilter, ChallengeWindow, Filtered, ForumFilter, ProjectFilter, SearchTerm,
    TagFilter, sort_threads,
};
pub use self::forum::{ForumCategory, ForumPost, ForumReply};
pub use self::identifiers::{
    BadgeId, ChallengeId, ForumPostId, ForumReplyId, IdentifierValidationError, NotificationId,
    ProjectId, UserId,
};
pub use self::notification::{Notification, NotificationFeed, NotificationType};
pub use self::project::{Project, ProjectCategory, ProjectStatus};
pub use self::selection::{Selection, ToggleOutcome};
pub use self::tag::{TagParseError, Tone};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Member, User, UserRole};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use engage_local::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no such project"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
