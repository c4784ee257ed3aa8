//! Driver list and driver registration

use actix_web::http::StatusCode;
use actix_web::test::call_service;
use taxi_service::errors::Error;
use taxi_service::requests::v1::driver::DriverStoreRequest;
use taxi_service::services::v1::driver::store::store;
use taxi_service::testing::instance::{get, rendered, token};
use taxi_service::testing::setup;

#[actix_web::test]
async fn test_driver_list_paginates() {
    let (service, db) = taxi_service::service!();
    let hasher = setup::password_hasher().unwrap();

    // The seeded admin plus six more
    for _ in 0..6 {
        setup::create_driver(&db, &hasher).await.unwrap();
    }

    let token = token(&db).await;
    let resp = call_service(&service, get("/drivers/", token).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let rendered = rendered(&resp);

    assert_eq!(rendered.template, "taxi/driver_list.html");
    assert_eq!(rendered.context["driver_list"].as_array().unwrap().len(), 5);
    assert_eq!(rendered.context["driver_list"][0]["username"], "admin");
    assert!(rendered.context["driver_list"][0].get("password").is_none());
    assert_eq!(rendered.context["paginator"]["count"], 7);

    let resp = call_service(&service, get("/drivers/?page=2", token).to_request()).await;
    assert_eq!(taxi_service::testing::instance::rendered(&resp).context["driver_list"].as_array().unwrap().len(), 2);

    let resp = call_service(&service, get("/drivers/?page=3", token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_store_driver_hashes_password() {
    let db = setup::database().await;
    let hasher = setup::password_hasher().unwrap();

    let driver = store(
        &db,
        &hasher,
        DriverStoreRequest::new("new.driver", "s3cret").license_number("ABC12345"),
    )
    .await
    .unwrap();

    assert_eq!(driver.username, "new.driver");
    assert_eq!(driver.license_number.as_deref(), Some("ABC12345"));

    let stored = taxi_service::entities::v1::drivers::Model::find_by_username(&db, "new.driver")
        .await
        .unwrap()
        .unwrap();

    assert_ne!(stored.password, "s3cret");
    assert!(hasher.verify("s3cret", &stored.password).unwrap());
}

#[actix_web::test]
async fn test_store_driver_rejects_duplicates() {
    let db = setup::database().await;
    let hasher = setup::password_hasher().unwrap();

    store(&db, &hasher, DriverStoreRequest::new("first", "pw").license_number("ABC12345"))
        .await
        .unwrap();

    let result = store(
        &db,
        &hasher,
        DriverStoreRequest::new("admin", "pw").license_number("ABC12345"),
    )
    .await;

    let Err(Error::Validation(errors)) = result else {
        panic!("expected validation error");
    };

    assert_eq!(errors.get("username"), ["A user with that username already exists."]);
    assert_eq!(
        errors.get("license_number"),
        ["Driver with this License number already exists."]
    );
}

#[actix_web::test]
async fn test_store_driver_rejects_malformed_license() {
    let db = setup::database().await;
    let hasher = setup::password_hasher().unwrap();

    let result = store(
        &db,
        &hasher,
        DriverStoreRequest::new("driver", "pw").license_number("AB123456"),
    )
    .await;

    assert!(matches!(result, Err(Error::Validation(errors)) if errors.has("license_number")));
}
