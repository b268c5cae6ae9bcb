//! Tests for the error shield middleware.

use actix_web::body::to_bytes;
use actix_web::{App, HttpResponse, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::{ApiResult, TRACE_ID_HEADER};
use crate::middleware::Trace;

async fn call(shield: ErrorShield, path: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .wrap(shield)
            .route(
                "/panic",
                web::get().to(|| async {
                    if true {
                        panic!("kaboom");
                    }
                    HttpResponse::Ok().finish()
                }),
            )
            .route(
                "/internal",
                web::get().to(|| async {
                    ApiResult::<HttpResponse>::Err(ApiError::internal("database exploded"))
                }),
            )
            .route(
                "/missing",
                web::get().to(|| async {
                    ApiResult::<HttpResponse>::Err(ApiError::not_found("no such thread"))
                }),
            )
            .route(
                "/ok",
                web::get().to(|| async { HttpResponse::Ok().json(json!({"status": "ok"})) }),
            )
            .route(
                "/items/{id}",
                web::get().to(|path: web::Path<String>| async move {
                    HttpResponse::Ok().json(json!({ "id": path.into_inner() }))
                }),
            ),
    )
    .await;
    let req = actix_test::TestRequest::get().uri(path).to_request();
    let (status, bytes) = match actix_test::try_call_service(&app, req).await {
        Ok(res) => {
            let status = res.status();
            (status, to_bytes(res.into_body()).await.expect("read body"))
        }
        Err(err) => {
            let res = err.error_response();
            let status = res.status();
            (status, to_bytes(res.into_body()).await.expect("read body"))
        }
    };
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

#[rstest]
#[case(false)]
#[case(true)]
#[actix_web::test]
async fn panics_become_internal_errors(#[case] expose_details: bool) {
    let (status, body) = call(ErrorShield::new(expose_details), "/panic").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], INTERNAL_MESSAGE);
    if expose_details {
        assert_eq!(body["details"]["error"], "kaboom");
    } else {
        assert!(body.get("details").is_none());
    }
}

#[actix_web::test]
async fn internal_domain_errors_stay_redacted_outside_development() {
    let (status, body) = call(ErrorShield::new(false), "/internal").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], INTERNAL_MESSAGE);
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn internal_domain_errors_expose_detail_in_development() {
    let (status, body) = call(ErrorShield::new(true), "/internal").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], INTERNAL_MESSAGE);
    assert_eq!(body["details"]["error"], "database exploded");
}

#[rstest]
#[case("/missing", StatusCode::NOT_FOUND)]
#[case("/ok", StatusCode::OK)]
#[actix_web::test]
async fn other_responses_pass_through(#[case] path: &str, #[case] expected: StatusCode) {
    let (status, body) = call(ErrorShield::new(true), path).await;

    assert_eq!(status, expected);
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn routed_requests_reach_their_handler() {
    let (status, body) = call(ErrorShield::new(false), "/items/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "42");
}

#[actix_web::test]
async fn traced_panics_echo_the_trace_id() {
    let app = actix_test::init_service(
        App::new().wrap(ErrorShield::new(false)).wrap(Trace).route(
            "/panic",
            web::get().to(|| async {
                if true {
                    panic!("kaboom");
                }
                HttpResponse::Ok().finish()
            }),
        ),
    )
    .await;
    let req = actix_test::TestRequest::get().uri("/panic").to_request();
    let err = actix_test::try_call_service(&app, req)
        .await
        .expect_err("panic surfaces as an error");

    let res = err.error_response();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let bytes = to_bytes(res.into_body()).await.expect("read body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["traceId"], header.as_str());
}

#[test]
fn panic_payloads_are_described() {
    let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
    let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
    let opaque: Box<dyn Any + Send> = Box::new(7_u8);

    assert_eq!(panic_message(owned.as_ref()), "owned");
    assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
    assert_eq!(panic_message(opaque.as_ref()), "handler panicked");
}
