use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::entities::v1::tokens::Model;
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Authenticated as Cache;

/// Delete expired sessions from the database and the cache
#[tracing::instrument(skip_all)]
pub async fn purge(db: &DatabaseConnection, cached: &Cache) -> Result<u64, Error> {
    let purged = Model::purge_expired(db).await?;
    let evicted = cached.evict_expired();

    tracing::debug!(purged, evicted, "Expired sessions purged");

    Ok(purged)
}

/// Run [`purge`] every `interval` on the current actix runtime
pub fn spawn(db: DatabaseConnection, cached: Cache, metrics: AppMetrics, interval: Duration) {
    actix::spawn(async move {
        let mut ticker = actix::clock::interval(interval);

        loop {
            ticker.tick().await;

            match purge(&db, &cached).await {
                Ok(purged) => metrics.record_sessions_purged(purged),
                Err(e) => tracing::error!(error = %e, "Failed to purge expired sessions"),
            }
        }
    });
}
