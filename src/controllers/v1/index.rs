use actix_web::web::Data;
use sea_orm::DatabaseConnection;

use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Auth;
use crate::responses::TemplateResponse;
use crate::services;

pub const TEMPLATE: &str = "taxi/index.html";

/// Home page with record counts and the visit counter of this session
#[get("/")]
pub async fn index(
    auth: Auth,
    db: Data<DatabaseConnection>,
    metrics: Option<Data<AppMetrics>>,
) -> Result<TemplateResponse, Error> {
    let summary = services::v1::index::index(&db, &auth).await?;

    if let Some(metrics) = metrics {
        metrics.set_drivers_total(summary.num_drivers);
        metrics.set_manufacturers_total(summary.num_manufacturers);
    }

    Ok(TemplateResponse::new(TEMPLATE)
        .insert("num_drivers", &summary.num_drivers)
        .insert("num_manufacturers", &summary.num_manufacturers)
        .insert("num_visits", &summary.num_visits)
        .user(&auth.driver))
}
