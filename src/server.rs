//! HTTP server bootstrap

use std::time::Duration;

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

use crate::config::AppConfig;
use crate::metrics::{AppMetrics, MetricsMiddleware};
use crate::middlewares::v1::auth::Authenticated;
use crate::security::{PasswordHasher, SecurityHeadersMiddleware};
use crate::services::v1::auth::cleanup;
use crate::{database, router, templates};

/// Connect everything the handlers depend on and serve until shutdown
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to the database")?;
    let tera = templates::engine().context("Failed to compile templates")?;
    let hasher = PasswordHasher::from_config(&config.auth.argon2)
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?;
    let authenticated = Authenticated::new(Duration::from_secs(config.auth.session_cache_ttl));
    let metrics = AppMetrics::with_config(Some(&config));

    cleanup::spawn(
        db.clone(),
        authenticated.clone(),
        metrics.clone(),
        Duration::from_secs(config.auth.token_cleanup_interval),
    );

    let headers = config.security.headers.clone();
    let auth = Data::new(config.auth.clone());
    let db = Data::new(db);
    let tera = Data::new(tera);
    let hasher = Data::new(hasher);
    let authenticated = Data::new(authenticated);
    let app_metrics = Data::new(metrics.clone());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(SecurityHeadersMiddleware::new(headers.clone()))
            .wrap(MetricsMiddleware::new(metrics.clone()))
            .app_data(db.clone())
            .app_data(tera.clone())
            .app_data(hasher.clone())
            .app_data(authenticated.clone())
            .app_data(auth.clone())
            .app_data(app_metrics.clone())
            .configure(router::route)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = %config.app.environment,
        "Starting {} v{}",
        config.app.name,
        config.app.version,
    );

    server
        .bind((config.server.host.as_str(), config.server.port))
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?
        .run()
        .await
        .context("HTTP server failed")
}
