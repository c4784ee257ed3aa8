use sea_orm::QuerySelect;
use sea_orm::prelude::*;

use crate::entities::v1::manufacturers::Model;
use crate::errors::Error;
use crate::pagination::{Listing, PaginationRequest, Paginator};
use crate::responses::v1::manufacturer::Manufacturer;

pub const PAGINATE_BY: u64 = 5;

#[tracing::instrument(skip(db))]
pub async fn paginate(
    db: &DatabaseConnection,
    request: PaginationRequest,
) -> Result<Listing<Manufacturer>, Error> {
    let total = Model::total(db).await?;
    let paginator = Paginator::new(total, PAGINATE_BY);
    let page = paginator.page(request.page.as_deref())?;

    let manufacturers = Model::ordered()
        .offset(page.offset())
        .limit(page.limit())
        .all(db)
        .await?;

    tracing::debug!(total, page = page.number, rows = manufacturers.len(), "Manufacturer page");

    Ok(Listing {
        paginator,
        page,
        items: manufacturers.into_iter().map(Manufacturer::from).collect(),
    })
}
