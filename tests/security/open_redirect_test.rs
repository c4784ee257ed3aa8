//! The post-login destination never leaves the site

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};
use sea_orm::{EntityTrait, PaginatorTrait};
use taxi_service::entities::v1::tokens;
use taxi_service::requests::v1::auth::LoginRequest;
use taxi_service::testing::instance::location;

#[actix_web::test]
async fn test_foreign_next_falls_back_to_home() {
    let (service, _db) = taxi_service::service!();

    for next in [
        "https://evil.example/",
        "//evil.example/",
        "/\\evil.example",
        "/\t/evil.example/",
        "/\n/evil.example/",
        "/\r\n/evil.example/",
        "javascript:alert(1)",
    ] {
        let req = TestRequest::post()
            .uri("/accounts/login/")
            .set_form(LoginRequest {
                next: Some(next.to_string()),
                ..LoginRequest::new("admin", "password")
            })
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND, "{next}");
        assert_eq!(location(&resp), "/", "{next}");
    }
}

#[actix_web::test]
async fn test_local_next_is_honoured() {
    let (service, _db) = taxi_service::service!();

    let req = TestRequest::post()
        .uri("/accounts/login/")
        .set_form(LoginRequest {
            next: Some("/drivers/?page=2".to_string()),
            ..LoginRequest::new("admin", "password")
        })
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(location(&resp), "/drivers/?page=2");
}

#[actix_web::test]
async fn test_header_breaking_next_still_logs_in() {
    let (service, db) = taxi_service::service!();

    let req = TestRequest::post()
        .uri("/accounts/login/")
        .set_form(LoginRequest {
            next: Some("/\n/evil.example/".to_string()),
            ..LoginRequest::new("admin", "password")
        })
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");
    assert!(resp.response().cookies().any(|cookie| cookie.name() == "sessionid"));
    assert_eq!(tokens::Entity::find().count(&db).await.unwrap(), 1);
}
