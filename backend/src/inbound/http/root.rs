//! Service banner and the legacy placeholder listings.
//!
//! ```text
//! GET /
//! GET /api/projects
//! GET /api/challenges
//! GET /api/users
//! ```
//!
//! The placeholders predate the `/api/v1` views and keep their original
//! shape: a message plus an empty `data` array.

use actix_web::{HttpResponse, get, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Banner returned from the root path.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceBanner {
    #[schema(example = "Engage Local API is running!")]
    pub message: &'static str,
    #[schema(example = "1.0.0")]
    pub version: &'static str,
    /// RFC 3339 timestamp with millisecond precision.
    #[schema(example = "2024-08-28T12:00:00.000Z")]
    pub timestamp: String,
}

impl ServiceBanner {
    fn at(now: DateTime<Utc>) -> Self {
        Self {
            message: "Engage Local API is running!",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Placeholder listing with no records.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlaceholderListing {
    #[schema(example = "Projects endpoint - Coming soon!")]
    pub message: String,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<serde_json::Value>,
}

impl PlaceholderListing {
    fn coming_soon(resource: &str) -> Self {
        Self {
            message: format!("{resource} endpoint - Coming soon!"),
            data: Vec::new(),
        }
    }
}

/// Report that the API is running.
#[utoipa::path(
    get,
    path = "/",
    tags = ["meta"],
    responses((status = 200, description = "Service banner", body = ServiceBanner))
)]
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(ServiceBanner::at(state.clock.utc()))
}

/// Placeholder project listing.
#[utoipa::path(
    get,
    path = "/api/projects",
    tags = ["placeholders"],
    responses((status = 200, description = "Empty listing", body = PlaceholderListing))
)]
#[get("/api/projects")]
pub async fn placeholder_projects() -> HttpResponse {
    HttpResponse::Ok().json(PlaceholderListing::coming_soon("Projects"))
}

/// Placeholder challenge listing.
#[utoipa::path(
    get,
    path = "/api/challenges",
    tags = ["placeholders"],
    responses((status = 200, description = "Empty listing", body = PlaceholderListing))
)]
#[get("/api/challenges")]
pub async fn placeholder_challenges() -> HttpResponse {
    HttpResponse::Ok().json(PlaceholderListing::coming_soon("Challenges"))
}

/// Placeholder user listing.
#[utoipa::path(
    get,
    path = "/api/users",
    tags = ["placeholders"],
    responses((status = 200, description = "Empty listing", body = PlaceholderListing))
)]
#[get("/api/users")]
pub async fn placeholder_users() -> HttpResponse {
    HttpResponse::Ok().json(PlaceholderListing::coming_soon("Users"))
}
