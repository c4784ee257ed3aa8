use actix_web::web::{Data, Query};
use sea_orm::DatabaseConnection;

use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;
use crate::pagination::PaginationRequest;
use crate::responses::TemplateResponse;
use crate::services;

pub const LIST_TEMPLATE: &str = "taxi/driver_list.html";

/// Drivers, five per page
#[get("/drivers/")]
pub async fn paginate(
    auth: Auth,
    db: Data<DatabaseConnection>,
    Query(request): Query<PaginationRequest>,
) -> Result<TemplateResponse, Error> {
    let listing = services::v1::driver::paginate::paginate(&db, request).await?;

    Ok(TemplateResponse::list(
        LIST_TEMPLATE,
        "driver_list",
        &listing.items,
        &listing.paginator,
        &listing.page,
    )
    .user(&auth.driver))
}
