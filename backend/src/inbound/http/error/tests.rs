//! Tests for the JSON error envelope.

use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

const TRACE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, header, body)
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn each_code_has_one_status(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(status_of(code), status);
    assert_eq!(Error::new(code, "x").status_code(), status);
}

#[rstest]
#[actix_web::test]
async fn client_errors_render_with_their_details() {
    let error = Error::invalid_request("unknown category")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"field": "category", "value": "sports", "code": "invalid_tag"}));

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "unknown category");
    assert_eq!(body["traceId"], TRACE_ID);
    assert_eq!(body["details"]["value"], "sports");
}

#[rstest]
#[actix_web::test]
async fn internal_errors_render_masked() {
    let error = Error::internal("dataset lock poisoned")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"lock": "users"}));

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["message"], INTERNAL_MESSAGE);
    assert_eq!(body["traceId"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn untraced_errors_send_no_header() {
    let (_, header, body) = render(&Error::not_found("no such project")).await;

    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
}

#[rstest]
fn public_view_keeps_client_errors_whole() {
    let error = Error::not_found("no such thread").with_details(json!({"id": "9"}));
    assert_eq!(public_view(&error), error);
}

#[rstest]
#[actix_web::test]
async fn envelope_response_does_not_mask() {
    let payload = Error::internal(INTERNAL_MESSAGE).with_details(json!({"error": "kaboom"}));

    let response = envelope_response(&payload);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["details"]["error"], "kaboom");
}
