//! In-memory repository built from the example dataset.
//!
//! Seeds are converted into validated domain entities once, when the
//! repository is constructed. Tags are parsed into closed enums, author and
//! participant ids are resolved into [`Member`] references, and badge ids are
//! resolved into full [`Badge`] records. After construction the repository is
//! immutable and safe to share behind an `Arc`.

use std::collections::HashMap;

use async_trait::async_trait;
use example_data::{
    BadgeSeed, ChallengeSeed, Dataset, ForumPostSeed, ForumReplySeed, NotificationSeed,
    ProjectSeed, UserSeed,
};
use thiserror::Error;

use crate::domain::ports::{CommunityRepository, CommunityRepositoryError};
use crate::domain::{
    Badge, BadgeId, Challenge, ChallengeId, ForumPost, ForumPostId, ForumReply, ForumReplyId,
    IdentifierValidationError, Member, Notification, NotificationId, Project, ProjectId,
    TagParseError, User, UserId,
};

/// Errors raised while converting seeds into domain entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetConversionError {
    /// A seed carried an identifier the domain rejects.
    #[error("{collection} '{id}': {source}")]
    InvalidIdentifier {
        /// Collection holding the record.
        collection: &'static str,
        /// Raw identifier of the record.
        id: String,
        /// Validation failure.
        #[source]
        source: IdentifierValidationError,
    },
    /// A seed carried a tag outside its vocabulary.
    #[error("{collection} '{id}': {source}")]
    InvalidTag {
        /// Collection holding the record.
        collection: &'static str,
        /// Raw identifier of the record.
        id: String,
        /// Parse failure.
        #[source]
        source: TagParseError,
    },
    /// A seed referenced a record that does not exist.
    #[error("{collection} '{id}' references unknown {target} '{reference}'")]
    UnknownReference {
        /// Collection holding the dangling reference.
        collection: &'static str,
        /// Identifier of the referencing record.
        id: String,
        /// Collection the reference should resolve into.
        target: &'static str,
        /// The unresolved identifier.
        reference: String,
    },
}

/// Identifies the record being converted so failures can name it.
#[derive(Clone, Copy)]
struct Origin<'a> {
    collection: &'static str,
    id: &'a str,
}

impl<'a> Origin<'a> {
    const fn new(collection: &'static str, id: &'a str) -> Self {
        Self { collection, id }
    }

    fn identifier<T>(
        self,
        parsed: Result<T, IdentifierValidationError>,
    ) -> Result<T, DatasetConversionError> {
        parsed.map_err(|source| DatasetConversionError::InvalidIdentifier {
            collection: self.collection,
            id: self.id.to_owned(),
            source,
        })
    }

    fn tag<T: std::str::FromStr<Err = TagParseError>>(
        self,
        raw: &str,
    ) -> Result<T, DatasetConversionError> {
        raw.parse()
            .map_err(|source| DatasetConversionError::InvalidTag {
                collection: self.collection,
                id: self.id.to_owned(),
                source,
            })
    }

    fn unknown(self, target: &'static str, reference: &str) -> DatasetConversionError {
        DatasetConversionError::UnknownReference {
            collection: self.collection,
            id: self.id.to_owned(),
            target,
            reference: reference.to_owned(),
        }
    }
}

/// Community repository serving a converted example dataset.
///
/// # Examples
/// ```
/// use example_data::Dataset;
/// use engage_local::outbound::example_dataset::ExampleDatasetRepository;
///
/// let dataset = Dataset::builtin().expect("built-in dataset");
/// let repository = ExampleDatasetRepository::from_dataset(&dataset).expect("converts");
/// assert_eq!(repository.user_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExampleDatasetRepository {
    users: Vec<User>,
    projects: Vec<Project>,
    challenges: Vec<Challenge>,
    forum_posts: Vec<ForumPost>,
    notifications: Vec<Notification>,
}

impl ExampleDatasetRepository {
    /// Convert every seed collection in `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetConversionError`] when a seed carries an invalid
    /// identifier, an unknown tag, or an unresolvable reference.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, DatasetConversionError> {
        let badges = dataset
            .badges()
            .iter()
            .map(|seed| Ok((seed.id.as_str(), convert_badge(seed)?)))
            .collect::<Result<HashMap<_, _>, DatasetConversionError>>()?;

        let users = dataset
            .users()
            .iter()
            .map(|seed| convert_user(seed, &badges))
            .collect::<Result<Vec<_>, _>>()?;

        let members: HashMap<&str, Member> = users
            .iter()
            .map(|user| (user.id.as_ref(), user.as_member()))
            .collect();

        let projects = dataset
            .projects()
            .iter()
            .map(|seed| convert_project(seed, &members))
            .collect::<Result<Vec<_>, _>>()?;
        let challenges = dataset
            .challenges()
            .iter()
            .map(convert_challenge)
            .collect::<Result<Vec<_>, _>>()?;
        let forum_posts = dataset
            .forum_posts()
            .iter()
            .map(|seed| convert_forum_post(seed, &members))
            .collect::<Result<Vec<_>, _>>()?;
        let notifications = dataset
            .notifications()
            .iter()
            .map(convert_notification)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            users,
            projects,
            challenges,
            forum_posts,
            notifications,
        })
    }

    /// Number of converted members.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

fn convert_badge(seed: &BadgeSeed) -> Result<Badge, DatasetConversionError> {
    let origin = Origin::new("badge", &seed.id);
    Ok(Badge {
        id: origin.identifier(BadgeId::new(seed.id.as_str()))?,
        name: seed.name.clone(),
        description: seed.description.clone(),
        rarity: origin.tag(&seed.rarity)?,
        requirements: seed.requirements.clone(),
        unlocked_at: seed.unlocked_at,
    })
}

fn convert_user(
    seed: &UserSeed,
    badges: &HashMap<&str, Badge>,
) -> Result<User, DatasetConversionError> {
    let origin = Origin::new("user", &seed.id);
    let badges = seed
        .badge_ids
        .iter()
        .map(|badge_id| {
            badges
                .get(badge_id.as_str())
                .cloned()
                .ok_or_else(|| origin.unknown("badge", badge_id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(User {
        id: origin.identifier(UserId::new(seed.id.as_str()))?,
        name: seed.name.clone(),
        email: seed.email.clone(),
        avatar: seed.avatar.clone(),
        bio: seed.bio.clone(),
        level: seed.level,
        points: seed.points,
        badges,
        joined_at: seed.joined_at,
        role: origin.tag(&seed.role)?,
    })
}

fn resolve_member(
    origin: Origin<'_>,
    members: &HashMap<&str, Member>,
    user_id: &str,
) -> Result<Member, DatasetConversionError> {
    members
        .get(user_id)
        .cloned()
        .ok_or_else(|| origin.unknown("user", user_id))
}

fn convert_project(
    seed: &ProjectSeed,
    members: &HashMap<&str, Member>,
) -> Result<Project, DatasetConversionError> {
    let origin = Origin::new("project", &seed.id);
    let participants = seed
        .participant_ids
        .iter()
        .map(|user_id| resolve_member(origin, members, user_id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Project {
        id: origin.identifier(ProjectId::new(seed.id.as_str()))?,
        title: seed.title.clone(),
        description: seed.description.clone(),
        category: origin.tag(&seed.category)?,
        author: resolve_member(origin, members, &seed.author_id)?,
        votes: seed.votes,
        status: origin.tag(&seed.status)?,
        participants,
        tags: seed.tags.clone(),
        created_at: seed.created_at,
        updated_at: seed.updated_at,
        required_points: seed.required_points,
    })
}

fn convert_challenge(seed: &ChallengeSeed) -> Result<Challenge, DatasetConversionError> {
    let origin = Origin::new("challenge", &seed.id);
    let completed_by = seed
        .completed_by
        .iter()
        .map(|user_id| origin.identifier(UserId::new(user_id.as_str())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Challenge {
        id: origin.identifier(ChallengeId::new(seed.id.as_str()))?,
        title: seed.title.clone(),
        description: seed.description.clone(),
        kind: origin.tag(&seed.kind)?,
        points: seed.points,
        deadline: seed.deadline,
        requirements: seed.requirements.clone(),
        completed_by,
        created_at: seed.created_at,
        is_active: seed.is_active,
    })
}

fn convert_reply(
    seed: &ForumReplySeed,
    post_id: &ForumPostId,
    members: &HashMap<&str, Member>,
) -> Result<ForumReply, DatasetConversionError> {
    let origin = Origin::new("forum reply", &seed.id);
    let parent_reply_id = seed
        .parent_reply_id
        .as_deref()
        .map(|parent| origin.identifier(ForumReplyId::new(parent)))
        .transpose()?;

    Ok(ForumReply {
        id: origin.identifier(ForumReplyId::new(seed.id.as_str()))?,
        content: seed.content.clone(),
        author: resolve_member(origin, members, &seed.author_id)?,
        post_id: post_id.clone(),
        parent_reply_id,
        likes: seed.likes,
        created_at: seed.created_at,
        updated_at: seed.updated_at,
    })
}

fn convert_forum_post(
    seed: &ForumPostSeed,
    members: &HashMap<&str, Member>,
) -> Result<ForumPost, DatasetConversionError> {
    let origin = Origin::new("forum post", &seed.id);
    let id = origin.identifier(ForumPostId::new(seed.id.as_str()))?;
    let replies = seed
        .replies
        .iter()
        .map(|reply| convert_reply(reply, &id, members))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ForumPost {
        id,
        title: seed.title.clone(),
        content: seed.content.clone(),
        category: origin.tag(&seed.category)?,
        author: resolve_member(origin, members, &seed.author_id)?,
        replies,
        likes: seed.likes,
        is_pinned: seed.is_pinned,
        tags: seed.tags.clone(),
        created_at: seed.created_at,
        updated_at: seed.updated_at,
    })
}

fn convert_notification(seed: &NotificationSeed) -> Result<Notification, DatasetConversionError> {
    let origin = Origin::new("notification", &seed.id);
    Ok(Notification {
        id: origin.identifier(NotificationId::new(seed.id.as_str()))?,
        user_id: origin.identifier(UserId::new(seed.user_id.as_str()))?,
        kind: origin.tag(&seed.kind)?,
        title: seed.title.clone(),
        message: seed.message.clone(),
        is_read: seed.is_read,
        created_at: seed.created_at,
        related_id: seed.related_id.clone(),
    })
}

#[async_trait]
impl CommunityRepository for ExampleDatasetRepository {
    async fn list_users(&self) -> Result<Vec<User>, CommunityRepositoryError> {
        Ok(self.users.clone())
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, CommunityRepositoryError> {
        Ok(self.users.iter().find(|user| &user.id == id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, CommunityRepositoryError> {
        Ok(self.projects.clone())
    }

    async fn list_challenges(&self) -> Result<Vec<Challenge>, CommunityRepositoryError> {
        Ok(self.challenges.clone())
    }

    async fn list_forum_posts(&self) -> Result<Vec<ForumPost>, CommunityRepositoryError> {
        Ok(self.forum_posts.clone())
    }

    async fn notifications_for(
        &self,
        user: &UserId,
    ) -> Result<Vec<Notification>, CommunityRepositoryError> {
        Ok(self
            .notifications
            .iter()
            .filter(|notification| &notification.user_id == user)
            .cloned()
            .collect())
    }
}
