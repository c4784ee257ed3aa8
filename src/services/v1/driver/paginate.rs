use sea_orm::QuerySelect;
use sea_orm::prelude::*;

use crate::entities::v1::drivers::Model;
use crate::errors::Error;
use crate::pagination::{Listing, PaginationRequest, Paginator};
use crate::responses::v1::driver::Driver;

pub const PAGINATE_BY: u64 = 5;

#[tracing::instrument(skip(db))]
pub async fn paginate(
    db: &DatabaseConnection,
    request: PaginationRequest,
) -> Result<Listing<Driver>, Error> {
    let total = Model::total(db).await?;
    let paginator = Paginator::new(total, PAGINATE_BY);
    let page = paginator.page(request.page.as_deref())?;

    let drivers = Model::ordered()
        .offset(page.offset())
        .limit(page.limit())
        .all(db)
        .await?;

    Ok(Listing {
        paginator,
        page,
        items: drivers.iter().map(Driver::from).collect(),
    })
}
