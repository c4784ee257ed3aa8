//! SQL injection attempts through query strings and form fields
//!
//! Every value reaches the database as a bound parameter, so hostile input is
//! either rejected or stored verbatim.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};
use sea_orm::EntityTrait;
use taxi_service::entities::v1::{drivers, manufacturers};
use taxi_service::requests::v1::auth::LoginRequest;
use taxi_service::requests::v1::manufacturer::ManufacturerRequest;
use taxi_service::testing::instance::{get, post, token};
use taxi_service::testing::setup::create_manufacturers;

const PAYLOADS: &[&str] = &[
    "' OR '1'='1",
    "1; DROP TABLE manufacturers; --",
    "1 UNION SELECT * FROM drivers",
    "admin'--",
];

#[actix_web::test]
async fn test_page_parameter_injection() {
    let (service, db) = taxi_service::service!();
    create_manufacturers(&db, 6).await.unwrap();
    let token = token(&db).await;

    for payload in PAYLOADS {
        let uri = format!("/manufacturers/?page={}", urlencoding::encode(payload));
        let resp = call_service(&service, get(&uri, token).to_request()).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{payload}");
    }

    assert_eq!(manufacturers::Entity::find().all(&db).await.unwrap().len(), 6);
}

#[actix_web::test]
async fn test_login_username_injection() {
    let (service, db) = taxi_service::service!();

    for payload in PAYLOADS {
        let req = TestRequest::post()
            .uri("/accounts/login/")
            .set_form(LoginRequest::new(*payload, *payload))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "{payload}");
        assert!(resp.response().cookies().next().is_none(), "{payload}");
    }

    assert_eq!(drivers::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_manufacturer_name_is_stored_verbatim() {
    let (service, db) = taxi_service::service!();
    let token = token(&db).await;

    for payload in PAYLOADS {
        let req = post("/manufacturers/create/", token)
            .set_form(ManufacturerRequest::new(*payload, "Nowhere"))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND, "{payload}");
    }

    let stored: Vec<String> = manufacturers::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|manufacturer| manufacturer.name)
        .collect();

    assert_eq!(stored, PAYLOADS);
}
