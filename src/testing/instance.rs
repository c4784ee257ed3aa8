use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use taxi_service_migration::ADMIN;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::entities::v1::drivers;
use crate::responses::Rendered;

/// A fresh session of the seeded admin driver
pub async fn token(db: &DatabaseConnection) -> Uuid {
    let admin = drivers::Model::find_by_username(db, ADMIN)
        .await
        .expect("Failed to query admin")
        .expect("Admin driver is seeded by the migrations");

    token_for(db, &admin).await
}

pub async fn token_for(db: &DatabaseConnection, driver: &drivers::Model) -> Uuid {
    driver
        .generate_token(db, Duration::from_secs(60 * 60))
        .await
        .expect("Failed to create token")
        .id
}

pub fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::new(AuthConfig::default().session_cookie, token.to_string())
}

/// `GET uri` carrying the session cookie of `token`
pub fn get(uri: &str, token: Uuid) -> TestRequest {
    TestRequest::get().uri(uri).cookie(session_cookie(token))
}

/// `POST uri` carrying the session cookie of `token`
pub fn post(uri: &str, token: Uuid) -> TestRequest {
    TestRequest::post().uri(uri).cookie(session_cookie(token))
}

/// Template and context the response was rendered from
pub fn rendered<B>(response: &ServiceResponse<B>) -> Rendered {
    response
        .response()
        .extensions()
        .get::<Rendered>()
        .cloned()
        .expect("Response was not rendered from a template")
}

/// Value of the `Location` header
pub fn location<B>(response: &ServiceResponse<B>) -> String {
    response
        .headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("Response has no Location header")
        .to_string()
}

/// Test service with the full router and every piece of shared state
///
/// `service!()` builds a fresh database and returns `(service, db)`,
/// `service!(db)` reuses an existing connection.
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let service = $crate::service!(db.clone());

        (service, db)
    }};
    ($db:expr) => {{
        let app = ::actix_web::App::new()
            .wrap($crate::security::SecurityHeadersMiddleware::new(
                $crate::config::SecurityHeadersConfig::default(),
            ))
            .app_data(::actix_web::web::Data::new($db))
            .app_data(::actix_web::web::Data::new(
                $crate::middlewares::v1::auth::Authenticated::default(),
            ))
            .app_data(::actix_web::web::Data::new(
                $crate::config::AuthConfig::default(),
            ))
            .app_data(::actix_web::web::Data::new(
                $crate::testing::setup::password_hasher().expect("Failed to create hasher"),
            ))
            .app_data(::actix_web::web::Data::new(
                $crate::templates::engine().expect("Failed to compile templates"),
            ))
            .app_data(::actix_web::web::Data::new($crate::metrics::AppMetrics::new()))
            .configure($crate::router::route);

        ::actix_web::test::init_service(app).await
    }};
}
