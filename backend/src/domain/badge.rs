//! Achievement badges.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::identifiers::BadgeId;
use super::tag::{Tone, define_tag};

define_tag! {
    /// Rarity tier of a badge.
    pub enum BadgeRarity ("badge rarity") {
        Common => "common",
        Rare => "rare",
        Epic => "epic",
        Legendary => "legendary",
    }
}

impl BadgeRarity {
    /// Colour family for the rarity tier.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Common => Tone::Gray,
            Self::Rare => Tone::Blue,
            Self::Epic => Tone::Purple,
            Self::Legendary => Tone::Yellow,
        }
    }
}

/// An achievement a member can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub rarity: BadgeRarity,
    /// Free-text unlock requirement.
    pub requirements: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}
