//! Rendering of domain errors as JSON responses.
//!
//! Every failure leaves the service in the same envelope (`code`, `message`,
//! optional `traceId` and `details`) with the trace id echoed as a header.
//! Internal errors are masked before they reach the client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

/// Client-facing message for every internal error.
pub(crate) const INTERNAL_MESSAGE: &str = "Internal server error";

/// HTTP status carried by responses for `code`.
pub(crate) const fn status_of(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The part of `error` a client may see.
///
/// Client errors pass through whole. Internal errors keep only their trace
/// id so a report can still be correlated with the logs.
pub(crate) fn public_view(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let masked = Error::internal(INTERNAL_MESSAGE);
    match error.trace_id() {
        Some(id) => masked.with_trace_id(id),
        None => masked,
    }
}

/// Serialise `payload` as-is under the status for its code.
pub(crate) fn envelope_response(payload: &Error) -> HttpResponse {
    let mut response = HttpResponse::build(status_of(payload.code()));
    if let Some(id) = payload.trace_id() {
        response.insert_header((TRACE_ID_HEADER, id));
    }
    response.json(payload)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_of(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        envelope_response(&public_view(self))
    }
}

#[cfg(test)]
mod tests;
