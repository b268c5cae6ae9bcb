//! Closed tag vocabularies and their presentation tones.
//!
//! Every textual tag in the dataset (categories, statuses, roles, rarities)
//! parses into a closed enum. Unknown tags fail at parse time with
//! [`TagParseError`] so presentation lookups never need a fallback arm.

use serde::Serialize;
use utoipa::ToSchema;

/// Error returned when a tag is outside its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} '{value}'")]
pub struct TagParseError {
    vocabulary: &'static str,
    value: String,
}

impl TagParseError {
    pub(crate) fn new(vocabulary: &'static str, value: impl Into<String>) -> Self {
        Self {
            vocabulary,
            value: value.into(),
        }
    }

    /// Name of the vocabulary that rejected the value.
    #[must_use]
    pub fn vocabulary(&self) -> &'static str {
        self.vocabulary
    }

    /// The rejected value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// Colour family used to render a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Gray,
    Yellow,
    Green,
    Blue,
    Purple,
    Red,
    Pink,
    Indigo,
}

/// Declares a closed tag enum with its wire spelling.
///
/// Generates `as_str`, `ALL`, `Display`, `FromStr`, and serde/OpenAPI
/// derives using the listed spellings.
macro_rules! define_tag {
    (
        $(#[$outer:meta])*
        pub enum $name:ident ($vocabulary:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::utoipa::ToSchema,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the vocabulary in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire spelling of the tag.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::tag::TagParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::domain::tag::TagParseError::new($vocabulary, other)),
                }
            }
        }
    };
}

pub(crate) use define_tag;
