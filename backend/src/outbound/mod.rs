//! Outbound adapters implementing domain ports.
//!
//! - **example_dataset**: in-memory community repository converted from the
//!   `example-data` crate at startup
//!
//! Adapters are thin translators that convert between domain types and
//! storage representations. They contain no business logic.

pub mod example_dataset;
