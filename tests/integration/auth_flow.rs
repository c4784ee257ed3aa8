//! Login, session cookie and logout

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service};
use sea_orm::EntityTrait;
use taxi_service::entities::v1::{drivers, tokens};
use taxi_service::requests::v1::auth::LoginRequest;
use taxi_service::testing::instance::{get, location, post, rendered, token};
use taxi_service::testing::setup::{self, PASSWORD};

fn session_id<B>(resp: &actix_web::dev::ServiceResponse<B>) -> uuid::Uuid {
    let cookie = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "sessionid")
        .expect("Session cookie is set");

    assert_eq!(cookie.http_only(), Some(true));

    uuid::Uuid::parse_str(cookie.value()).unwrap()
}

#[actix_web::test]
async fn test_login_page_renders() {
    let (service, _db) = taxi_service::service!();

    let req = TestRequest::get()
        .uri("/accounts/login/?next=/manufacturers/")
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let rendered = rendered(&resp);

    assert_eq!(rendered.template, "registration/login.html");
    assert_eq!(rendered.context["next"], "/manufacturers/");
}

#[actix_web::test]
async fn test_complete_session_flow() {
    let (service, db) = taxi_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let driver = setup::create_driver(&db, &hasher).await.unwrap();

    // Login and follow `next`
    let req = TestRequest::post()
        .uri("/accounts/login/")
        .set_form(LoginRequest {
            next: Some("/manufacturers/".to_string()),
            ..LoginRequest::new(&driver.username, PASSWORD)
        })
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/manufacturers/");

    let token = session_id(&resp);

    let stored = drivers::Entity::find_by_id(driver.id).one(&db).await.unwrap().unwrap();
    assert!(stored.last_login.is_some());

    // The cookie opens protected pages
    let resp = call_service(&service, get("/manufacturers/", token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(rendered(&resp).context["user"]["username"], driver.username);

    // Logout removes the session
    let resp = call_service(&service, post("/accounts/logout/", token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/accounts/login/");

    let cleared = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "sessionid")
        .expect("Session cookie is cleared");
    assert_eq!(cleared.value(), "");

    assert!(tokens::Entity::find_by_id(token).one(&db).await.unwrap().is_none());

    // The cached session is gone too
    let resp = call_service(&service, get("/manufacturers/", token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[actix_web::test]
async fn test_login_with_seeded_admin_defaults_to_home() {
    let (service, _db) = taxi_service::service!();

    let req = TestRequest::post()
        .uri("/accounts/login/")
        .set_form(LoginRequest::new("admin", "password"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");
}

#[actix_web::test]
async fn test_wrong_password_rerenders_login() {
    let (service, db) = taxi_service::service!();
    let hasher = setup::password_hasher().unwrap();
    let driver = setup::create_driver(&db, &hasher).await.unwrap();

    let req = TestRequest::post()
        .uri("/accounts/login/")
        .set_form(LoginRequest::new(&driver.username, "wrong"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.response().cookies().next().is_none());

    let rendered = rendered(&resp);

    assert_eq!(rendered.template, "registration/login.html");
    assert_eq!(rendered.context["form"]["username"], driver.username);
    assert_eq!(
        rendered.context["errors"]["form"][0],
        "Please enter a correct username and password. Note that both fields may be case-sensitive."
    );
}

#[actix_web::test]
async fn test_unknown_username_rerenders_login() {
    let (service, _db) = taxi_service::service!();

    let req = TestRequest::post()
        .uri("/accounts/login/")
        .set_form(LoginRequest::new("nobody", "password"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(rendered(&resp).context["errors"]["form"].is_array());
}

#[actix_web::test]
async fn test_blank_fields_are_required() {
    let (service, _db) = taxi_service::service!();

    let req = TestRequest::post()
        .uri("/accounts/login/")
        .set_form(LoginRequest::default())
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let context = rendered(&resp).context;

    assert_eq!(context["errors"]["username"][0], "This field is required.");
    assert_eq!(context["errors"]["password"][0], "This field is required.");
}

#[actix_web::test]
async fn test_logout_without_session_redirects() {
    let (service, _db) = taxi_service::service!();

    let req = TestRequest::post().uri("/accounts/logout/").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/accounts/login/");
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};

    let (service, db) = taxi_service::service!();
    let token = token(&db).await;

    let mut model = tokens::Entity::find_by_id(token)
        .one(&db)
        .await
        .unwrap()
        .unwrap()
        .into_active_model();
    model.expired_at = Set(taxi_service::helpers::now() - chrono::Duration::minutes(1));
    model.update(&db).await.unwrap();

    let resp = call_service(&service, get("/", token).to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/accounts/login/?next=%2F");
}

#[actix_web::test]
async fn test_purge_removes_expired_tokens() {
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};
    use taxi_service::middlewares::v1::auth::Authenticated;
    use taxi_service::services::v1::auth::cleanup;

    let db = setup::database().await;
    let live = token(&db).await;
    let expired = token(&db).await;

    let mut model = tokens::Entity::find_by_id(expired)
        .one(&db)
        .await
        .unwrap()
        .unwrap()
        .into_active_model();
    model.expired_at = Set(taxi_service::helpers::now() - chrono::Duration::seconds(1));
    model.update(&db).await.unwrap();

    let purged = cleanup::purge(&db, &Authenticated::default()).await.unwrap();

    assert_eq!(purged, 1);
    assert!(tokens::Entity::find_by_id(live).one(&db).await.unwrap().is_some());
    assert!(tokens::Entity::find_by_id(expired).one(&db).await.unwrap().is_none());
}
