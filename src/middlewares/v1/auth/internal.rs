use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::entities::v1::tokens;
use crate::errors::Error;
use crate::helpers::now;
use crate::metrics::AppMetrics;
use crate::responses::v1::driver::Driver;

use super::Authenticated;

/// The logged-in driver of the current request
///
/// Extracting it from a request without a valid session fails with
/// [`Error::Unauthenticated`], which redirects to the login page.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Auth {
    #[serde(skip_serializing)]
    pub token: Uuid,
    pub driver: Driver,
    pub expired_at: NaiveDateTime,
}

impl Auth {
    pub fn is_expired(&self) -> bool {
        self.expired_at <= now()
    }

    /// Seconds until the session expires, as a cookie `Max-Age`
    pub fn max_age(&self) -> i64 {
        (self.expired_at - now()).num_seconds().max(0)
    }
}

/// Session id carried by the cookie, or by an `Authorization: Bearer` header
pub fn session_token(req: &HttpRequest) -> Option<Uuid> {
    let cookie = req
        .app_data::<Data<AuthConfig>>()
        .map(|config| config.session_cookie.clone())
        .unwrap_or_else(|| AuthConfig::default().session_cookie);

    if let Some(cookie) = req.cookie(&cookie) {
        return Uuid::parse_str(cookie.value()).ok();
    }

    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;

    Uuid::parse_str(token.trim()).ok()
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let start = Instant::now();
        let next = req
            .uri()
            .path_and_query()
            .map(|path| path.as_str().to_string())
            .unwrap_or_else(|| req.path().to_string());

        let Some(db) = req.app_data::<Data<DatabaseConnection>>().cloned() else {
            return Box::pin(async move {
                tracing::error!("Database connection is not registered");

                Err(Error::internal("Failed to get database connection"))
            });
        };

        let Some(authenticated) = req.app_data::<Data<Authenticated>>().cloned() else {
            return Box::pin(async move {
                tracing::error!("Session cache is not registered");

                Err(Error::internal("Failed to get session cache"))
            });
        };

        let metrics = req.app_data::<Data<AppMetrics>>().cloned();

        let Some(id) = session_token(req) else {
            return Box::pin(async move {
                tracing::debug!(%next, "Request carries no session");

                Err(Error::Unauthenticated { next })
            });
        };

        Box::pin(async move {
            if let Some(auth) = authenticated.get(id) {
                if let Some(metrics) = &metrics {
                    metrics.record_session_cache_hit();
                }

                tracing::debug!(elapsed = ?start.elapsed(), "Authenticated from cache");

                return Ok(auth);
            }

            if let Some(metrics) = &metrics {
                metrics.record_session_cache_miss();
            }

            let Some((token, driver)) = tokens::Model::driver(&db, id).await? else {
                tracing::debug!(token_id = %id, "Unknown or expired session");

                return Err(Error::Unauthenticated { next });
            };

            let auth = Auth {
                token: token.id,
                driver: driver.into(),
                expired_at: token.expired_at,
            };

            authenticated.set(&auth);

            tracing::debug!(elapsed = ?start.elapsed(), "Authenticated from database");

            Ok(auth)
        })
    }
}
