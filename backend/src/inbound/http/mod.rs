//! HTTP inbound adapter exposing REST endpoints.

pub mod community;
pub mod error;
pub mod health;
pub mod not_found;
pub mod root;
pub mod state;
mod validation;

pub use error::ApiResult;
