//! Paging behaviour of the manufacturer list beyond the happy path

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};
use taxi_service::testing::instance::{get, location, rendered, token};
use taxi_service::testing::setup::create_manufacturers;

fn names(context: &serde_json::Value) -> Vec<String> {
    context["manufacturer_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|manufacturer| manufacturer["name"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_unauthenticated_list_redirects_to_login() {
    let (service, db) = taxi_service::service!();
    create_manufacturers(&db, 15).await.unwrap();

    let req = TestRequest::get().uri("/manufacturers/?page=2").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        location(&resp),
        "/accounts/login/?next=%2Fmanufacturers%2F%3Fpage%3D2"
    );
}

#[actix_web::test]
async fn test_unknown_session_redirects_to_login() {
    let (service, _db) = taxi_service::service!();

    let req = get("/manufacturers/", uuid::Uuid::new_v4()).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[actix_web::test]
async fn test_bearer_token_is_accepted() {
    let (service, db) = taxi_service::service!();
    let token = token(&db).await;

    let req = TestRequest::get()
        .uri("/manufacturers/")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_page_past_the_end_is_not_found() {
    let (service, db) = taxi_service::service!();
    create_manufacturers(&db, 15).await.unwrap();
    let token = token(&db).await;

    for page in ["4", "0", "-1", "abc", "2.5"] {
        let req = get(&format!("/manufacturers/?page={page}"), token).to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "page={page}");
    }
}

#[actix_web::test]
async fn test_last_page_keyword() {
    let (service, db) = taxi_service::service!();
    create_manufacturers(&db, 15).await.unwrap();

    let req = get("/manufacturers/?page=last", token(&db).await).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let context = rendered(&resp).context;
    let expected: Vec<String> = (10..15).map(|i| format!("Manufacturer {i}")).collect();

    assert_eq!(names(&context), expected);
    assert_eq!(context["page_obj"]["number"], 3);
    assert_eq!(context["page_obj"]["has_next"], false);
}

#[actix_web::test]
async fn test_repeated_page_parameter_uses_last_value() {
    let (service, db) = taxi_service::service!();
    create_manufacturers(&db, 15).await.unwrap();

    let req = get("/manufacturers/?page=2&page=3", token(&db).await).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let context = rendered(&resp).context;
    let expected: Vec<String> = (10..15).map(|i| format!("Manufacturer {i}")).collect();

    assert_eq!(names(&context), expected);
    assert_eq!(context["page_obj"]["number"], 3);
}

#[actix_web::test]
async fn test_partial_last_page() {
    let (service, db) = taxi_service::service!();
    create_manufacturers(&db, 12).await.unwrap();

    let req = get("/manufacturers/?page=3", token(&db).await).to_request();
    let resp = call_service(&service, req).await;
    let context = rendered(&resp).context;

    assert_eq!(names(&context), ["Manufacturer 10", "Manufacturer 11"]);
    assert_eq!(context["page_obj"]["start_index"], 11);
    assert_eq!(context["page_obj"]["end_index"], 12);
}

#[actix_web::test]
async fn test_empty_table_renders_first_page() {
    let (service, db) = taxi_service::service!();
    let token = token(&db).await;

    let req = get("/manufacturers/", token).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let context = rendered(&resp).context;

    assert!(names(&context).is_empty());
    assert_eq!(context["is_paginated"], false);
    assert_eq!(context["paginator"]["num_pages"], 1);

    let body = actix_web::test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("There are no manufacturers in taxi service."));

    let req = get("/manufacturers/?page=2", token).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_object_list_matches_manufacturer_list() {
    let (service, db) = taxi_service::service!();
    create_manufacturers(&db, 7).await.unwrap();

    let req = get("/manufacturers/?page=2", token(&db).await).to_request();
    let resp = call_service(&service, req).await;
    let context = rendered(&resp).context;

    assert_eq!(context["object_list"], context["manufacturer_list"]);
    assert_eq!(context["page_obj"]["previous_page_number"], 1);
    assert_eq!(context["page_obj"]["next_page_number"], serde_json::Value::Null);
}
