//! Shared validation helpers for inbound HTTP adapters.
//!
//! Raw query and path values are parsed into domain types here. Failures
//! become `invalid_request` errors whose details name the offending field.

use std::str::FromStr;

use serde_json::json;

use crate::domain::{Error, IdentifierValidationError, TagParseError, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidTag,
    InvalidIdentifier,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidTag => "invalid_tag",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse an optional tag query parameter, treating a missing value as empty.
///
/// Empty input is handed to the parser so callers decide whether it means
/// "no filter".
pub(crate) fn parse_tag<T>(raw: Option<&str>, field: FieldName) -> Result<T, Error>
where
    T: FromStr<Err = TagParseError>,
{
    let raw = raw.unwrap_or_default();
    raw.parse().map_err(|err: TagParseError| {
        field_error(field, ErrorCode::InvalidTag, err.to_string(), raw)
    })
}

/// Parse a path segment into a [`UserId`].
pub(crate) fn parse_user_id(raw: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err: IdentifierValidationError| {
        field_error(field, ErrorCode::InvalidIdentifier, err.to_string(), raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode as DomainErrorCode, ProjectCategory, TagFilter};
    use rstest::rstest;

    #[rstest]
    #[case(None, TagFilter::All)]
    #[case(Some(""), TagFilter::All)]
    #[case(Some("all"), TagFilter::All)]
    #[case(Some("culture"), TagFilter::Only(ProjectCategory::Culture))]
    fn tag_filters_parse(
        #[case] raw: Option<&str>,
        #[case] expected: TagFilter<ProjectCategory>,
    ) {
        let parsed: TagFilter<ProjectCategory> =
            parse_tag(raw, FieldName::new("category")).expect("valid tag");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn unknown_tags_name_the_field() {
        let err = parse_tag::<TagFilter<ProjectCategory>>(
            Some("gardening"),
            FieldName::new("category"),
        )
        .expect_err("unknown category");

        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), "unknown project category 'gardening'");
        assert_eq!(
            err.details(),
            Some(&json!({
                "field": "category",
                "value": "gardening",
                "code": "invalid_tag",
            }))
        );
    }

    #[rstest]
    #[case(" 1")]
    #[case("")]
    fn malformed_user_ids_are_rejected(#[case] raw: &str) {
        let err = parse_user_id(raw, FieldName::new("id")).expect_err("invalid id");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
    }
}
