//! Error types for the example-data crate.
//!
//! Dataset loading and resident generation each get a semantic error enum
//! derived with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating an example dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the dataset.
        actual: u32,
    },

    /// Two records in the same collection share an identifier.
    #[error("duplicate {collection} id '{id}'")]
    DuplicateId {
        /// Collection holding the duplicate.
        collection: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// A record references an identifier missing from its target collection.
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

/// Errors raised while generating example residents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid display name after maximum retries.
    #[error("failed to generate valid display name after {max_attempts} attempts")]
    DisplayNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_error_io_formats_correctly() {
        let err = DatasetError::IoError {
            path: Utf8PathBuf::from("/tmp/dataset.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset file at '/tmp/dataset.json': file not found"
        );
    }

    #[test]
    fn dataset_error_version_formats_correctly() {
        let err = DatasetError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported dataset version: expected 1, found 2"
        );
    }

    #[test]
    fn dataset_error_duplicate_formats_correctly() {
        let err = DatasetError::DuplicateId {
            collection: "project",
            id: "7".to_owned(),
        };
        assert_eq!(err.to_string(), "duplicate project id '7'");
    }

    #[test]
    fn dataset_error_unknown_reference_formats_correctly() {
        let err = DatasetError::UnknownReference {
            collection: "project",
            id: "1".to_owned(),
            target: "user",
            reference: "42".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "project '1' references unknown user '42'"
        );
    }

    #[test]
    fn generation_error_display_name_formats_correctly() {
        let err = GenerationError::DisplayNameGenerationFailed { max_attempts: 100 };
        assert_eq!(
            err.to_string(),
            "failed to generate valid display name after 100 attempts"
        );
    }
}
