//! Gamification arithmetic: level bands, progress, and coarse ages.
//!
//! Levels are fixed bands of [`POINTS_PER_LEVEL`] points. A member at level
//! `n` is expected to hold between `n * 200` and `(n + 1) * 200` points; the
//! functions below stay total when that does not hold and clamp instead.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{Challenge, Project, UserId};

/// Points spanned by one level.
pub const POINTS_PER_LEVEL: u32 = 200;

/// Percent progress from the start of `level` towards the next level.
///
/// Linear in points and clamped to `0.0..=100.0`. Points are whole and a band
/// is 200 points wide, so every result is an exact multiple of half a percent.
///
/// # Examples
/// ```
/// use engage_local::domain::level_progress;
///
/// assert_eq!(level_progress(5, 1_100), 50.0);
/// assert_eq!(level_progress(5, 1_101), 50.5);
/// assert_eq!(level_progress(5, 1_250), 100.0);
/// assert_eq!(level_progress(5, 900), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "progress is served as a fractional percent"
)]
pub fn level_progress(level: u32, points: u32) -> f64 {
    let band = i64::from(POINTS_PER_LEVEL);
    let into_band = (i64::from(points) - i64::from(level) * band).clamp(0, band);
    let into_band = u32::try_from(into_band).unwrap_or(POINTS_PER_LEVEL);
    f64::from(into_band) * 100.0 / f64::from(POINTS_PER_LEVEL)
}

/// Points missing before `level + 1` is reached.
///
/// Zero or a negative value means the member already holds enough points
/// for the next level.
#[must_use]
pub fn points_to_next_level(level: u32, points: u32) -> i64 {
    (i64::from(level) + 1) * i64::from(POINTS_PER_LEVEL) - i64::from(points)
}

/// Level implied by a points total.
///
/// # Examples
/// ```
/// use engage_local::domain::level_for_points;
///
/// assert_eq!(level_for_points(0), 0);
/// assert_eq!(level_for_points(399), 1);
/// assert_eq!(level_for_points(400), 2);
/// ```
#[must_use]
pub fn level_for_points(points: u32) -> u32 {
    points.div_euclid(POINTS_PER_LEVEL)
}

/// Level summary served for a member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    pub points: u32,
    /// Percent through the current band, in half-percent steps.
    pub progress: f64,
    pub points_to_next_level: i64,
}

impl LevelProgress {
    /// Compute the summary for a level and points pair.
    #[must_use]
    pub fn new(level: u32, points: u32) -> Self {
        Self {
            level,
            points,
            progress: level_progress(level, points),
            points_to_next_level: points_to_next_level(level, points),
        }
    }

    /// Whether the next level is already within reach.
    #[must_use]
    pub fn is_next_level_reached(&self) -> bool {
        self.points_to_next_level <= 0
    }
}

/// Activity counts shown on a member's profile and challenge board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    /// Projects the member proposed.
    pub projects_authored: usize,
    /// Projects listing the member as a participant.
    pub projects_participating: usize,
    /// Sum of the vote counters on the member's own projects.
    pub votes_received: i64,
    /// Challenges the member has completed.
    pub challenges_completed: usize,
    /// Challenges open at the time of the count, for anyone to join.
    pub active_challenges: usize,
}

impl MemberStats {
    /// Count `member`'s activity across the given records.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use engage_local::domain::{MemberStats, UserId};
    ///
    /// let member = UserId::new("1").expect("valid id");
    /// let stats = MemberStats::compute(&member, &[], &[], Utc::now());
    /// assert_eq!(stats, MemberStats::default());
    /// ```
    #[must_use]
    pub fn compute(
        member: &UserId,
        projects: &[Project],
        challenges: &[Challenge],
        now: DateTime<Utc>,
    ) -> Self {
        let authored = projects.iter().filter(|project| project.author.id == *member);
        let (projects_authored, votes_received) = authored
            .fold((0, 0), |(count, votes), project| (count + 1, votes + project.votes));
        Self {
            projects_authored,
            projects_participating: projects
                .iter()
                .filter(|project| project.participants.iter().any(|p| p.id == *member))
                .count(),
            votes_received,
            challenges_completed: challenges
                .iter()
                .filter(|challenge| challenge.is_completed_by(member))
                .count(),
            active_challenges: challenges
                .iter()
                .filter(|challenge| challenge.is_open(now))
                .count(),
        }
    }
}

/// Coarse "time ago" bucket for a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    /// Less than a minute ago, or in the future.
    JustNow,
    /// Whole minutes, below one hour.
    Minutes(i64),
    /// Whole hours, below one day.
    Hours(i64),
    /// Whole days, below one week.
    Days(i64),
    /// A week or more ago.
    On(NaiveDate),
}

impl std::fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JustNow => f.write_str("just now"),
            Self::Minutes(minutes) => write!(f, "{minutes}min"),
            Self::Hours(hours) => write!(f, "{hours}h"),
            Self::Days(days) => write!(f, "{days}d"),
            Self::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Bucket the age of `created_at` as seen from `now`.
///
/// # Examples
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use engage_local::domain::{RelativeAge, relative_age};
///
/// let now = Utc.with_ymd_and_hms(2024, 8, 27, 12, 0, 0).single().expect("valid");
/// assert_eq!(relative_age(now - TimeDelta::minutes(5), now), RelativeAge::Minutes(5));
/// assert_eq!(relative_age(now - TimeDelta::hours(30), now), RelativeAge::Days(1));
/// ```
#[must_use]
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> RelativeAge {
    let elapsed = now.signed_duration_since(created_at);
    if elapsed < TimeDelta::minutes(1) {
        return RelativeAge::JustNow;
    }
    if elapsed < TimeDelta::hours(1) {
        return RelativeAge::Minutes(elapsed.num_minutes());
    }
    if elapsed < TimeDelta::days(1) {
        return RelativeAge::Hours(elapsed.num_hours());
    }
    if elapsed < TimeDelta::weeks(1) {
        return RelativeAge::Days(elapsed.num_days());
    }
    RelativeAge::On(created_at.date_naive())
}
