//! Gamified community challenges.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::identifiers::{ChallengeId, UserId};
use super::selection::{Selection, ToggleOutcome};
use super::tag::{Tone, define_tag};

const MILLIS_PER_DAY: i64 = 86_400_000;

define_tag! {
    /// Who takes part in a challenge.
    pub enum ChallengeType ("challenge type") {
        Individual => "individual",
        Team => "team",
        Community => "community",
    }
}

impl ChallengeType {
    /// Display label for the challenge type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Team => "Team",
            Self::Community => "Community",
        }
    }

    /// Colour family for the challenge type.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Individual => Tone::Blue,
            Self::Team => Tone::Green,
            Self::Community => Tone::Purple,
        }
    }
}

/// A time-boxed task rewarding points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    /// Points awarded on completion.
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub requirements: Vec<String>,
    pub completed_by: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Challenge {
    /// Whether the deadline has passed at `now`.
    ///
    /// A challenge without a deadline never expires.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Active and not yet past its deadline.
    #[must_use]
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired(now)
    }

    /// Inactive or past its deadline.
    #[must_use]
    pub fn is_closed(&self, now: DateTime<Utc>) -> bool {
        !self.is_active || self.is_expired(now)
    }

    /// Whole days until the deadline, rounded up.
    ///
    /// Returns `None` without a deadline. Zero or negative values mean the
    /// deadline has passed.
    ///
    /// # Examples
    /// ```
    /// # use chrono::{TimeDelta, TimeZone, Utc};
    /// # use engage_local::domain::{Challenge, ChallengeId, ChallengeType};
    /// let now = Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).single().expect("valid");
    /// let challenge = Challenge {
    ///     id: ChallengeId::new("1").expect("valid id"),
    ///     title: "Plant 100 Saplings".to_owned(),
    ///     description: "Plant trees along the river.".to_owned(),
    ///     kind: ChallengeType::Team,
    ///     points: 500,
    ///     deadline: Some(now + TimeDelta::hours(30)),
    ///     requirements: Vec::new(),
    ///     completed_by: Vec::new(),
    ///     created_at: now,
    ///     is_active: true,
    /// };
    /// assert_eq!(challenge.days_left(now), Some(2));
    /// ```
    #[must_use]
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        self.deadline.map(|deadline| {
            let remaining = deadline.signed_duration_since(now).num_milliseconds();
            let whole_days = remaining.div_euclid(MILLIS_PER_DAY);
            if remaining.rem_euclid(MILLIS_PER_DAY) > 0 {
                whole_days + 1
            } else {
                whole_days
            }
        })
    }

    /// Whether the deadline falls within the next seven days.
    #[must_use]
    pub fn is_ending_soon(&self, now: DateTime<Utc>) -> bool {
        self.days_left(now).is_some_and(|days| (1..=7).contains(&days))
    }

    /// Whether `user` has completed the challenge.
    #[must_use]
    pub fn is_completed_by(&self, user: &UserId) -> bool {
        self.completed_by.contains(user)
    }

    /// Join or leave the challenge for the member owning `joined`.
    ///
    /// Joining tracks membership only; no counter moves.
    pub fn toggle_join(&self, joined: &mut Selection<ChallengeId>) -> ToggleOutcome {
        joined.toggle(&self.id)
    }
}
