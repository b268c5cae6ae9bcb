//! Engage Local backend library.
//!
//! Hexagonal layout: `domain` holds the community model and its rules,
//! `inbound::http` adapts it to Actix handlers, and `outbound` serves the
//! example dataset through the repository port.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{ErrorShield, Trace};
