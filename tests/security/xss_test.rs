//! Stored values are HTML-escaped when rendered

use actix_web::test::{call_service, read_body};
use taxi_service::entities::v1::manufacturers;
use taxi_service::testing::instance::{get, token};

#[actix_web::test]
async fn test_manufacturer_name_is_escaped() {
    let (service, db) = taxi_service::service!();
    manufacturers::Model::store(
        &db,
        "<script>alert('xss')</script>".to_string(),
        "<img src=x onerror=alert(1)>".to_string(),
    )
    .await
    .unwrap();

    let resp = call_service(&service, get("/manufacturers/", token(&db).await).to_request()).await;
    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(!body.contains("<script>alert"));
    assert!(!body.contains("<img src=x"));
    assert!(body.contains("&lt;script&gt;"));
}

#[actix_web::test]
async fn test_login_form_escapes_username_and_next() {
    let (service, _db) = taxi_service::service!();

    let req = actix_web::test::TestRequest::post()
        .uri("/accounts/login/")
        .set_form([
            ("username", "\"><script>alert(1)</script>"),
            ("password", "x"),
            ("next", "\"><b>next</b>"),
        ])
        .to_request();
    let resp = call_service(&service, req).await;
    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(!body.contains("<b>next</b>"));
}
