//! Final safety net for handler panics and unhandled service errors.
//!
//! [`ErrorShield`] turns a panicking handler or an `Err` escaping the inner
//! service into an error whose rendered response is a 500 carrying the
//! standard error envelope. In development mode the underlying message is
//! exposed as `details.error`; otherwise only the generic message is returned.
//! Responses that already carry a 500 status from a domain error get the same
//! treatment so the development detail is consistent.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use serde_json::json;
use tracing::error;

use crate::domain::Error as ApiError;
use crate::inbound::http::error::{INTERNAL_MESSAGE, envelope_response};


/// Middleware converting panics and escaped errors into 500 responses.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use engage_local::middleware::ErrorShield;
///
/// let app = App::new().wrap(ErrorShield::new(false));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorShield {
    expose_details: bool,
}

impl ErrorShield {
    /// Build the shield; `expose_details` adds the underlying message to
    /// responses and should only be set in development.
    #[must_use]
    pub const fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorShield
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorShieldMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorShieldMiddleware {
            service,
            expose_details: self.expose_details,
        }))
    }
}

/// Service wrapper produced by [`ErrorShield`].
pub struct ErrorShieldMiddleware<S> {
    service: S,
    expose_details: bool,
}

impl<S, B> Service<ServiceRequest> for ErrorShieldMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let expose_details = self.expose_details;
        // The router must be the sole owner of the request, so only the path
        // is kept while the inner service runs.
        let path = req.path().to_owned();
        let started = std::panic::catch_unwind(AssertUnwindSafe(|| self.service.call(req)));

        Box::pin(async move {
            let outcome = match started {
                Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
                Err(panic) => Err(panic),
            };

            match outcome {
                Ok(Ok(res)) => Ok(reshape_internal(res, expose_details)),
                Ok(Err(err)) => {
                    let underlying = err.to_string();
                    error!(error = %underlying, path = %path, "unhandled service error");
                    Err(shielded_error(&underlying, expose_details))
                }
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    error!(panic = %message, path = %path, "handler panicked");
                    Err(shielded_error(&message, expose_details))
                }
            }
        })
    }
}

fn reshape_internal<B>(
    res: ServiceResponse<B>,
    expose_details: bool,
) -> ServiceResponse<EitherBody<B>> {
    let underlying = match res.response().error() {
        Some(err) if expose_details && res.status() == StatusCode::INTERNAL_SERVER_ERROR => {
            err.to_string()
        }
        _ => return res.map_into_left_body(),
    };
    let (request, _) = res.into_parts();
    ServiceResponse::new(request, shielded_response(&underlying, true)).map_into_right_body()
}

fn shielded_response(underlying: &str, expose_details: bool) -> HttpResponse {
    let mut payload = ApiError::internal(INTERNAL_MESSAGE);
    if expose_details {
        payload = payload.with_details(json!({ "error": underlying }));
    }
    envelope_response(&payload)
}

/// Error whose rendered response is the shielded 500 envelope.
fn shielded_error(underlying: &str, expose_details: bool) -> Error {
    InternalError::from_response(
        INTERNAL_MESSAGE,
        shielded_response(underlying, expose_details),
    )
    .into()
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_owned()
    }
}

#[cfg(test)]
mod tests;
