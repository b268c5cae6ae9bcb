//! Built-in example dataset for Engage Local.
//!
//! This crate owns the records the application serves in place of a real
//! backend store: community members, badges, project proposals, challenges,
//! forum threads, and notifications. It is deliberately independent of the
//! backend's domain types; the backend converts seeds into validated domain
//! entities at startup.
//!
//! # Overview
//!
//! - Seed record types mirroring the domain model
//! - A JSON dataset compiled into the crate, plus loading from disk
//! - Validation of identifier uniqueness and cross-record references
//! - Deterministic resident generation for larger demo populations
//!
//! # Example
//!
//! ```
//! use example_data::Dataset;
//!
//! let dataset = Dataset::builtin().expect("valid dataset");
//! let author = dataset
//!     .find_user(&dataset.projects()[0].author_id)
//!     .expect("author exists");
//! assert_eq!(author.name, "Maria Silva");
//! ```

mod dataset;
mod error;
mod generator;
mod seed;
mod validation;

pub use dataset::Dataset;
pub use error::{DatasetError, GenerationError};
pub use generator::{POINTS_PER_LEVEL, generate_residents};
pub use seed::{
    BadgeSeed, ChallengeSeed, ForumPostSeed, ForumReplySeed, NotificationSeed, ProjectSeed,
    UserSeed,
};
pub use validation::{NAME_MAX, NAME_MIN, is_presentable_name};
