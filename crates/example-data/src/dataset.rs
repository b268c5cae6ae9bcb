//! The example dataset and its JSON loader.
//!
//! A dataset bundles every seed collection the application serves. The
//! built-in dataset is compiled into the crate; alternative datasets can be
//! loaded from disk. Loading validates identifier uniqueness and that every
//! cross-collection reference resolves.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, GenerationError};
use crate::generator::generate_residents;
use crate::seed::{
    BadgeSeed, ChallengeSeed, ForumPostSeed, NotificationSeed, ProjectSeed, UserSeed,
};

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

const BUILTIN_DATASET: &str = include_str!("../fixtures/engage-local.json");

/// A validated collection of example records.
///
/// # Example
///
/// ```
/// use example_data::Dataset;
///
/// let dataset = Dataset::builtin().expect("built-in dataset is valid");
/// assert_eq!(dataset.users().len(), 3);
/// assert!(dataset.find_user("1").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    version: u32,
    users: Vec<UserSeed>,
    badges: Vec<BadgeSeed>,
    projects: Vec<ProjectSeed>,
    challenges: Vec<ChallengeSeed>,
    forum_posts: Vec<ForumPostSeed>,
    notifications: Vec<NotificationSeed>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct RawDataset {
    version: u32,
    #[serde(default)]
    users: Vec<UserSeed>,
    #[serde(default)]
    badges: Vec<BadgeSeed>,
    #[serde(default)]
    projects: Vec<ProjectSeed>,
    #[serde(default)]
    challenges: Vec<ChallengeSeed>,
    #[serde(default)]
    forum_posts: Vec<ForumPostSeed>,
    #[serde(default)]
    notifications: Vec<NotificationSeed>,
}

impl Dataset {
    /// Returns the dataset compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the embedded JSON fails validation. This
    /// only happens when the fixture itself is edited incorrectly.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_DATASET)
    }

    /// Parses and validates a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed or has unknown fields
    /// - The version is unsupported
    /// - Two records in a collection share an id
    /// - A reference does not resolve
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// The parent directory is opened with a capability handle and the file
    /// is read relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IoError`] if the file cannot be read, or any
    /// parsing error from [`Dataset::from_json`].
    pub fn from_file(path: &Utf8Path) -> Result<Self, DatasetError> {
        let io_error = |e: std::io::Error| DatasetError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        let parent = path
            .parent()
            .filter(|p| !p.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| DatasetError::IoError {
            path: path.to_path_buf(),
            message: "path has no file name".to_owned(),
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(file_name).map_err(io_error)?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let dataset = Self {
            version: raw.version,
            users: raw.users,
            badges: raw.badges,
            projects: raw.projects,
            challenges: raw.challenges,
            forum_posts: raw.forum_posts,
            notifications: raw.notifications,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), DatasetError> {
        let user_ids = unique_ids("user", self.users.iter().map(|u| u.id.as_str()))?;
        let badge_ids = unique_ids("badge", self.badges.iter().map(|b| b.id.as_str()))?;
        unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique_ids("challenge", self.challenges.iter().map(|c| c.id.as_str()))?;
        unique_ids("forum post", self.forum_posts.iter().map(|p| p.id.as_str()))?;
        unique_ids(
            "notification",
            self.notifications.iter().map(|n| n.id.as_str()),
        )?;

        for user in &self.users {
            for badge_id in &user.badge_ids {
                ensure_known("user", &user.id, "badge", &badge_ids, badge_id)?;
            }
        }
        for project in &self.projects {
            ensure_known("project", &project.id, "user", &user_ids, &project.author_id)?;
            for participant in &project.participant_ids {
                ensure_known("project", &project.id, "user", &user_ids, participant)?;
            }
        }
        for challenge in &self.challenges {
            for user_id in &challenge.completed_by {
                ensure_known("challenge", &challenge.id, "user", &user_ids, user_id)?;
            }
        }
        for post in &self.forum_posts {
            ensure_known("forum post", &post.id, "user", &user_ids, &post.author_id)?;
            for reply in &post.replies {
                ensure_known("forum reply", &reply.id, "user", &user_ids, &reply.author_id)?;
            }
        }
        for notification in &self.notifications {
            ensure_known(
                "notification",
                &notification.id,
                "user",
                &user_ids,
                &notification.user_id,
            )?;
        }
        Ok(())
    }

    /// Appends `count` deterministically generated residents.
    ///
    /// Generated residents receive numeric ids continuing after the largest
    /// numeric id already present.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if a display name cannot be generated.
    ///
    /// # Example
    ///
    /// ```
    /// use example_data::Dataset;
    ///
    /// let dataset = Dataset::builtin()
    ///     .expect("valid")
    ///     .with_generated_residents(7, 4)
    ///     .expect("generated");
    /// assert_eq!(dataset.users().len(), 7);
    /// assert!(dataset.find_user("4").is_some());
    /// ```
    pub fn with_generated_residents(
        mut self,
        seed: u64,
        count: usize,
    ) -> Result<Self, GenerationError> {
        let next_id = self
            .users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        let residents = generate_residents(seed, count, next_id)?;
        self.users.extend(residents);
        Ok(self)
    }

    /// Returns the dataset version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all users.
    #[must_use]
    pub fn users(&self) -> &[UserSeed] {
        &self.users
    }

    /// Returns all badges.
    #[must_use]
    pub fn badges(&self) -> &[BadgeSeed] {
        &self.badges
    }

    /// Returns all projects.
    #[must_use]
    pub fn projects(&self) -> &[ProjectSeed] {
        &self.projects
    }

    /// Returns all challenges.
    #[must_use]
    pub fn challenges(&self) -> &[ChallengeSeed] {
        &self.challenges
    }

    /// Returns all forum posts.
    #[must_use]
    pub fn forum_posts(&self) -> &[ForumPostSeed] {
        &self.forum_posts
    }

    /// Returns all notifications.
    #[must_use]
    pub fn notifications(&self) -> &[NotificationSeed] {
        &self.notifications
    }

    /// Finds a user by id.
    #[must_use]
    pub fn find_user(&self, id: &str) -> Option<&UserSeed> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Finds a badge by id.
    #[must_use]
    pub fn find_badge(&self, id: &str) -> Option<&BadgeSeed> {
        self.badges.iter().find(|b| b.id == id)
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, DatasetError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(seen)
}

fn ensure_known(
    collection: &'static str,
    id: &str,
    target: &'static str,
    known: &HashSet<&str>,
    reference: &str,
) -> Result<(), DatasetError> {
    if known.contains(reference) {
        Ok(())
    } else {
        Err(DatasetError::UnknownReference {
            collection,
            id: id.to_owned(),
            target,
            reference: reference.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const MINIMAL_JSON: &str = r#"{
        "version": 1,
        "users": [{
            "id": "1",
            "name": "Ada",
            "email": "ada@example.com",
            "level": 0,
            "points": 0,
            "joinedAt": "2024-01-01T00:00:00Z",
            "role": "resident"
        }]
    }"#;

    #[rstest]
    fn builtin_dataset_is_valid() {
        let dataset = Dataset::builtin().expect("built-in dataset");
        assert_eq!(dataset.version(), 1);
        assert_eq!(dataset.projects().len(), 3);
        assert_eq!(dataset.challenges().len(), 3);
        assert_eq!(dataset.forum_posts().len(), 2);
        assert_eq!(dataset.notifications().len(), 2);
        assert_eq!(dataset.badges().len(), 3);
    }

    #[rstest]
    fn minimal_dataset_defaults_missing_collections() {
        let dataset = Dataset::from_json(MINIMAL_JSON).expect("valid dataset");
        assert_eq!(dataset.users().len(), 1);
        assert!(dataset.projects().is_empty());
        assert!(dataset.notifications().is_empty());
    }

    #[rstest]
    fn rejects_unsupported_version() {
        let result = Dataset::from_json(r#"{"version": 2}"#);
        assert_eq!(
            result,
            Err(DatasetError::UnsupportedVersion {
                expected: 1,
                actual: 2,
            })
        );
    }

    #[rstest]
    fn rejects_malformed_json() {
        let result = Dataset::from_json("{ not json");
        assert!(matches!(result, Err(DatasetError::ParseError { .. })));
    }

    #[rstest]
    fn rejects_duplicate_user_ids() {
        let json = r#"{
            "version": 1,
            "users": [
                {"id": "1", "name": "Ada", "email": "a@example.com", "level": 0,
                 "points": 0, "joinedAt": "2024-01-01T00:00:00Z", "role": "resident"},
                {"id": "1", "name": "Bea", "email": "b@example.com", "level": 0,
                 "points": 0, "joinedAt": "2024-01-01T00:00:00Z", "role": "ngo"}
            ]
        }"#;
        let result = Dataset::from_json(json);
        assert_eq!(
            result,
            Err(DatasetError::DuplicateId {
                collection: "user",
                id: "1".to_owned(),
            })
        );
    }

    #[rstest]
    fn rejects_dangling_project_author() {
        let json = r#"{
            "version": 1,
            "projects": [{
                "id": "1",
                "title": "Park benches",
                "description": "More benches.",
                "category": "infrastructure",
                "authorId": "9",
                "votes": 0,
                "status": "proposed",
                "createdAt": "2024-08-20T00:00:00Z",
                "updatedAt": "2024-08-20T00:00:00Z"
            }]
        }"#;
        let result = Dataset::from_json(json);
        assert_eq!(
            result,
            Err(DatasetError::UnknownReference {
                collection: "project",
                id: "1".to_owned(),
                target: "user",
                reference: "9".to_owned(),
            })
        );
    }

    #[rstest]
    fn generated_residents_continue_numeric_ids() {
        let dataset = Dataset::from_json(MINIMAL_JSON)
            .expect("valid dataset")
            .with_generated_residents(11, 2)
            .expect("generated");
        let ids: Vec<&str> = dataset.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
