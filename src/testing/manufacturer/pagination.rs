use actix_web::http::StatusCode;
use actix_web::test::call_service;
use sea_orm::EntityTrait;

use crate::entities::v1::manufacturers;
use crate::testing::instance::{get, rendered, token};
use crate::testing::setup::create_manufacturers;
use crate::urls;

const MANUFACTURERS: usize = 15;

fn names(context: &serde_json::Value) -> Vec<String> {
    context["manufacturer_list"]
        .as_array()
        .expect("manufacturer_list is a list")
        .iter()
        .map(|manufacturer| manufacturer["name"].as_str().unwrap().to_string())
        .collect()
}

fn expected(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("Manufacturer {i}")).collect()
}

#[actix_web::test]
async fn list_page_is_ok() {
    let (service, db) = crate::service!();
    create_manufacturers(&db, MANUFACTURERS).await.unwrap();

    let uri = urls::reverse(urls::MANUFACTURER_LIST, None).unwrap();
    let response = call_service(&service, get(&uri, token(&db).await).to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn list_uses_manufacturer_list_template() {
    let (service, db) = crate::service!();
    create_manufacturers(&db, MANUFACTURERS).await.unwrap();

    let response = call_service(&service, get("/manufacturers/", token(&db).await).to_request()).await;

    assert_eq!(rendered(&response).template, "taxi/manufacturer_list.html");
}

#[actix_web::test]
async fn first_page_lists_first_five() {
    let (service, db) = crate::service!();
    create_manufacturers(&db, MANUFACTURERS).await.unwrap();

    let response = call_service(&service, get("/manufacturers/", token(&db).await).to_request()).await;

    assert_eq!(names(&rendered(&response).context), expected(0..5));
}

#[actix_web::test]
async fn second_page_lists_next_five() {
    let (service, db) = crate::service!();
    create_manufacturers(&db, MANUFACTURERS).await.unwrap();

    let response =
        call_service(&service, get("/manufacturers/?page=2", token(&db).await).to_request()).await;

    assert_eq!(names(&rendered(&response).context), expected(5..10));
}

#[actix_web::test]
async fn third_page_lists_last_five() {
    let (service, db) = crate::service!();
    create_manufacturers(&db, MANUFACTURERS).await.unwrap();

    let response =
        call_service(&service, get("/manufacturers/?page=3", token(&db).await).to_request()).await;

    assert_eq!(names(&rendered(&response).context), expected(10..15));
}

#[actix_web::test]
async fn page_holds_five_manufacturers() {
    let (service, db) = crate::service!();
    create_manufacturers(&db, MANUFACTURERS).await.unwrap();

    let response = call_service(&service, get("/manufacturers/", token(&db).await).to_request()).await;
    let context = rendered(&response).context;

    assert_eq!(context["manufacturer_list"].as_array().unwrap().len(), 5);
    assert_eq!(context["is_paginated"], true);
    assert_eq!(context["paginator"]["num_pages"], 3);
}

#[actix_web::test]
async fn fixtures_are_stored() {
    let db = crate::testing::setup::database().await;
    create_manufacturers(&db, MANUFACTURERS).await.unwrap();

    let stored = manufacturers::Entity::find().all(&db).await.unwrap();

    assert_eq!(stored.len(), MANUFACTURERS);

    for (i, manufacturer) in stored.iter().enumerate() {
        assert_eq!(manufacturer.name, format!("Manufacturer {i}"));
        assert_eq!(manufacturer.country, format!("Country {i}"));
    }
}

#[actix_web::test]
async fn context_includes_logged_in_driver() {
    let (service, db) = crate::service!();

    let response = call_service(&service, get("/manufacturers/", token(&db).await).to_request()).await;
    let context = rendered(&response).context;

    assert_eq!(context["user"]["username"], "admin");
    assert_eq!(context["user"].get("password"), None);
}
