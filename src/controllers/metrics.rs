use actix_web::HttpResponse;
use actix_web::web::Data;

use crate::metrics::AppMetrics;

/// Prometheus text exposition of every recorded metric
#[get("/metrics")]
pub async fn metrics(app_metrics: Data<AppMetrics>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(app_metrics.render())
}
