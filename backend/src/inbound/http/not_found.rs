//! Catch-all handler for unmatched routes.

use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Respond 404 with the requested path, including any query string.
///
/// Registered as the application's default service.
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    let path = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned());
    debug!(method = %req.method(), path = %path, "route not found");

    let mut body = json!(Error::not_found("Route not found"));
    if let Some(object) = body.as_object_mut() {
        object.insert("path".to_owned(), json!(path));
    }
    HttpResponse::NotFound().json(body)
}
