//! Security headers on rendered pages and redirects

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};
use taxi_service::testing::instance::{get, token};

fn header<B>(resp: &actix_web::dev::ServiceResponse<B>, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[actix_web::test]
async fn test_rendered_page_carries_security_headers() {
    let (service, db) = taxi_service::service!();

    let resp = call_service(&service, get("/manufacturers/", token(&db).await).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "x-frame-options").as_deref(), Some("DENY"));
    assert_eq!(header(&resp, "x-content-type-options").as_deref(), Some("nosniff"));
    assert_eq!(header(&resp, "referrer-policy").as_deref(), Some("same-origin"));
    assert!(header(&resp, "content-security-policy").is_some());
    assert_eq!(
        header(&resp, "content-type").as_deref(),
        Some("text/html; charset=utf-8")
    );
}

#[actix_web::test]
async fn test_redirect_carries_security_headers() {
    let (service, _db) = taxi_service::service!();

    let resp = call_service(&service, TestRequest::get().uri("/manufacturers/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(header(&resp, "x-frame-options").as_deref(), Some("DENY"));
}
