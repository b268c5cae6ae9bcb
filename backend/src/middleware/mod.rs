//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as tracing and last-resort error handling.

pub mod error_shield;
pub mod trace;

pub use error_shield::ErrorShield;
pub use trace::Trace;
