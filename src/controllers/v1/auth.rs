use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::web::{Data, Form, Query};
use actix_web::{Either, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::config::AuthConfig;
use crate::errors::{Error, Validation};
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Auth, Authenticated as Cache};
use crate::requests::v1::auth::{LoginQuery, LoginRequest};
use crate::responses::{TemplateResponse, redirect};
use crate::security::PasswordHasher;
use crate::services;
use crate::urls;

pub const LOGIN_TEMPLATE: &str = "registration/login.html";

#[get("/accounts/login/")]
pub async fn login_form(Query(query): Query<LoginQuery>) -> TemplateResponse {
    form("", query.next.as_deref(), &Validation::new())
}

/// Create a new session and set the session cookie
///
/// Fail if
/// - username or password is blank
/// - username not found or password is incorrect
#[post("/accounts/login/")]
pub async fn login(
    db: Data<DatabaseConnection>,
    cached: Data<Cache>,
    hasher: Data<PasswordHasher>,
    config: Data<AuthConfig>,
    metrics: Option<Data<AppMetrics>>,
    Form(request): Form<LoginRequest>,
) -> Result<Either<TemplateResponse, HttpResponse>, Error> {
    let username = request.username.clone();
    let next = request.next.clone();
    let destination = urls::safe_next(next.as_deref());
    let result = services::v1::auth::login::login(&db, &cached, &hasher, &config, request).await;

    if let Some(metrics) = &metrics {
        metrics.record_login_attempt(result.is_ok());
    }

    match result {
        Ok(auth) => {
            let cookie = Cookie::build(config.session_cookie.clone(), auth.token.to_string())
                .path("/")
                .http_only(true)
                .secure(config.cookie_secure)
                .same_site(SameSite::Lax)
                .max_age(time::Duration::seconds(auth.max_age()))
                .finish();

            Ok(Either::Right(
                HttpResponse::Found()
                    .insert_header(("Location", destination))
                    .cookie(cookie)
                    .finish(),
            ))
        }
        Err(Error::Validation(errors)) => Ok(Either::Left(form(&username, next.as_deref(), &errors))),
        Err(e) => Err(e),
    }
}

/// Destroy the current session
///
/// Requests without a session are simply sent to the login page.
#[post("/accounts/logout/")]
pub async fn logout(
    auth: Option<Auth>,
    db: Data<DatabaseConnection>,
    cached: Data<Cache>,
    config: Data<AuthConfig>,
) -> Result<HttpResponse, Error> {
    if let Some(auth) = auth {
        services::v1::auth::logout::logout(&auth, &db, &cached).await?;
    }

    let mut cookie = Cookie::build(config.session_cookie.clone(), "")
        .path("/")
        .finish();
    cookie.make_removal();

    let mut response = redirect(urls::path(urls::LOGIN));
    response
        .add_cookie(&cookie)
        .map_err(|e| Error::internal(format!("Failed to clear session cookie: {e}")))?;

    Ok(response)
}

fn form(username: &str, next: Option<&str>, errors: &Validation) -> TemplateResponse {
    TemplateResponse::new(LOGIN_TEMPLATE)
        .insert("form", &json!({ "username": username }))
        .insert("next", next.unwrap_or_default())
        .insert("errors", errors)
}
