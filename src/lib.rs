#[macro_use(get, post)]
extern crate actix_web;

pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod helpers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod pagination;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod server;
pub mod services;
pub mod telemetry;
pub mod templates;
pub mod urls;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use errors::{Error, Validation};
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use middlewares::v1::auth::{Auth, Authenticated};
pub use security::SecurityHeadersMiddleware;
