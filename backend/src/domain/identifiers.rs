//! Opaque identifiers for community records.
//!
//! Identifiers are non-empty strings without surrounding whitespace. The
//! example dataset uses small integers (`"1"`, `"2"`), but nothing relies on
//! that shape.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    /// The identifier was empty.
    #[error("{kind} id must not be empty")]
    Empty {
        /// Kind of record the identifier names.
        kind: &'static str,
    },
    /// The identifier carried leading or trailing whitespace.
    #[error("{kind} id must not contain surrounding whitespace")]
    Untrimmed {
        /// Kind of record the identifier names.
        kind: &'static str,
    },
}

fn validate(kind: &'static str, raw: &str) -> Result<(), IdentifierValidationError> {
    if raw.is_empty() {
        return Err(IdentifierValidationError::Empty { kind });
    }
    if raw.trim() != raw {
        return Err(IdentifierValidationError::Untrimmed { kind });
    }
    Ok(())
}

macro_rules! define_identifier {
    ($(#[$outer:meta])* $name:ident => $kind:literal) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(id: impl Into<String>) -> Result<Self, IdentifierValidationError> {
                let id = id.into();
                validate($kind, &id)?;
                Ok(Self(id))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_identifier!(
    /// Identifier of a community member.
    UserId => "user"
);
define_identifier!(
    /// Identifier of a badge definition.
    BadgeId => "badge"
);
define_identifier!(
    /// Identifier of a project proposal.
    ProjectId => "project"
);
define_identifier!(
    /// Identifier of a challenge.
    ChallengeId => "challenge"
);
define_identifier!(
    /// Identifier of a forum thread.
    ForumPostId => "forum post"
);
define_identifier!(
    /// Identifier of a reply within a forum thread.
    ForumReplyId => "forum reply"
);
define_identifier!(
    /// Identifier of a notification.
    NotificationId => "notification"
);
