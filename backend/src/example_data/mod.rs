//! Startup wiring for the example dataset.

mod startup;

pub use startup::{StartupError, load_community_repository};
