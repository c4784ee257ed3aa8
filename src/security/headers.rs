//! Security headers middleware
//!
//! Adds the configured security headers to every response. Headers already
//! set by a handler are left alone.

use std::future::{Ready, ready};

use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;

use crate::config::SecurityHeadersConfig;

pub struct SecurityHeadersMiddleware {
    config: SecurityHeadersConfig,
}

impl SecurityHeadersMiddleware {
    pub fn new(config: SecurityHeadersConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeadersMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddlewareService {
            service,
            config: self.config.clone(),
        }))
    }
}

pub struct SecurityHeadersMiddlewareService<S> {
    service: S,
    config: SecurityHeadersConfig,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let config = self.config.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            if !config.enabled {
                return Ok(res);
            }

            let headers = res.headers_mut();

            set(headers, "content-security-policy", &config.csp);
            set(headers, "x-frame-options", &config.x_frame_options);
            set(headers, "x-content-type-options", &config.x_content_type_options);
            set(headers, "referrer-policy", &config.referrer_policy);

            if config.hsts_max_age > 0 {
                set(
                    headers,
                    "strict-transport-security",
                    &format!("max-age={}; includeSubDomains", config.hsts_max_age),
                );
            }

            Ok(res)
        })
    }
}

/// Empty or non-ASCII values are skipped
fn set(headers: &mut HeaderMap, name: &'static str, value: &str) {
    let name = HeaderName::from_static(name);

    if value.is_empty() || headers.contains_key(&name) {
        return;
    }

    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(e) => {
            tracing::warn!(header = %name, error = %e, "Skipping invalid security header value");
        }
    }
}
