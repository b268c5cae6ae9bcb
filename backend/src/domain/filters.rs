//! Filter criteria and the engine applying them to community records.
//!
//! Criteria are value objects parsed from query strings. Every criterion
//! composes by logical AND and an empty or `all` value passes everything.
//! Results come back as [`Filtered`] so callers can tell a filtered view
//! from the raw collection.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::challenge::{Challenge, ChallengeType};
use super::forum::{ForumCategory, ForumPost};
use super::project::{Project, ProjectCategory, ProjectStatus};
use super::tag::TagParseError;

/// Wire spelling of the wildcard filter value.
pub const ALL: &str = "all";

/// Case-insensitive substring search.
///
/// The term is used as given; an empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Build a search term from user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Whether the term is empty and so matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `haystack` contains the term, ignoring case.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    /// Whether any of `fields` contains the term.
    pub fn matches_any<'a>(&self, mut fields: impl Iterator<Item = &'a str>) -> bool {
        self.is_empty() || fields.any(|field| self.matches(field))
    }
}

/// Exact-match filter on a closed tag, or the `all` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFilter<T> {
    /// Pass every record.
    All,
    /// Pass records carrying exactly this tag.
    Only(T),
}

impl<T> Default for TagFilter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> TagFilter<T> {
    /// Whether `value` passes the filter.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for TagFilter<T>
where
    T: FromStr<Err = TagParseError>,
{
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() || value == ALL {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// Time window applied to challenges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChallengeWindow {
    /// No time restriction.
    #[default]
    All,
    /// Active with no deadline or a deadline still ahead.
    Active,
    /// Deadline within the next one to seven days (rounded up).
    EndingSoon,
    /// Inactive, or deadline already passed.
    Completed,
}

impl ChallengeWindow {
    /// Whether `challenge` falls in the window at `now`.
    #[must_use]
    pub fn accepts(self, challenge: &Challenge, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Active => challenge.is_open(now),
            Self::EndingSoon => challenge.is_ending_soon(now),
            Self::Completed => challenge.is_closed(now),
        }
    }
}

impl FromStr for ChallengeWindow {
    type Err = TagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | ALL => Ok(Self::All),
            "active" => Ok(Self::Active),
            "ending_soon" => Ok(Self::EndingSoon),
            "completed" => Ok(Self::Completed),
            other => Err(TagParseError::new("challenge window", other)),
        }
    }
}

/// Records that passed a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<T> {
    items: Vec<T>,
}

impl<T> Filtered<T> {
    fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Matching records in result order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of matching records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the result, returning the matching records.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Criteria for the project list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: SearchTerm,
    pub category: TagFilter<ProjectCategory>,
    pub status: TagFilter<ProjectStatus>,
}

impl ProjectFilter {
    /// Whether `project` satisfies every criterion.
    #[must_use]
    pub fn accepts(&self, project: &Project) -> bool {
        let fields = [project.title.as_str(), project.description.as_str()]
            .into_iter()
            .chain(project.tags.iter().map(String::as_str));
        self.search.matches_any(fields)
            && self.category.accepts(&project.category)
            && self.status.accepts(&project.status)
    }

    /// Apply the criteria, preserving input order.
    #[must_use]
    pub fn apply(&self, projects: &[Project]) -> Filtered<Project> {
        Filtered::new(
            projects
                .iter()
                .filter(|project| self.accepts(project))
                .cloned()
                .collect(),
        )
    }
}

/// Criteria for the challenge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeFilter {
    pub kind: TagFilter<ChallengeType>,
    pub window: ChallengeWindow,
}

impl ChallengeFilter {
    /// Whether `challenge` satisfies every criterion at `now`.
    #[must_use]
    pub fn accepts(&self, challenge: &Challenge, now: DateTime<Utc>) -> bool {
        self.kind.accepts(&challenge.kind) && self.window.accepts(challenge, now)
    }

    /// Apply the criteria as seen at `now`, preserving input order.
    #[must_use]
    pub fn apply(&self, challenges: &[Challenge], now: DateTime<Utc>) -> Filtered<Challenge> {
        Filtered::new(
            challenges
                .iter()
                .filter(|challenge| self.accepts(challenge, now))
                .cloned()
                .collect(),
        )
    }
}

/// Criteria for the forum thread list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumFilter {
    pub search: SearchTerm,
    pub category: TagFilter<ForumCategory>,
}

impl ForumFilter {
    /// Whether `post` satisfies every criterion.
    ///
    /// Search also covers the author's name.
    #[must_use]
    pub fn accepts(&self, post: &ForumPost) -> bool {
        let fields = [
            post.title.as_str(),
            post.content.as_str(),
            post.author.name.as_str(),
        ]
        .into_iter()
        .chain(post.tags.iter().map(String::as_str));
        self.search.matches_any(fields) && self.category.accepts(&post.category)
    }

    /// Apply the criteria, then sort pinned threads first and newest first
    /// within each group.
    #[must_use]
    pub fn apply(&self, posts: &[ForumPost]) -> Filtered<ForumPost> {
        let mut matching: Vec<ForumPost> = posts
            .iter()
            .filter(|post| self.accepts(post))
            .cloned()
            .collect();
        sort_threads(&mut matching);
        Filtered::new(matching)
    }
}

/// Pinned threads first, then descending creation time. Stable for ties.
pub fn sort_threads(posts: &mut [ForumPost]) {
    posts.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests;
