use sea_orm::prelude::*;
use sea_orm::{ActiveValue::Set, IntoActiveModel};

use crate::entities::v1::manufacturers::Model;
use crate::errors::Error;
use crate::requests::v1::manufacturer::ManufacturerRequest;
use crate::responses::v1::manufacturer::Manufacturer;

use super::NAME_TAKEN;

#[tracing::instrument(skip(db, request), fields(name = %request.name))]
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    request: ManufacturerRequest,
) -> Result<Manufacturer, Error> {
    let manufacturer = Model::find_by_id(db, id)
        .await?
        .ok_or_else(|| Error::not_found(format!("No manufacturer found matching id {id}")))?;

    let request = request.trimmed();
    let mut validation = request.validate();

    if !validation.has("name") && Model::name_exists(db, &request.name, Some(id)).await? {
        validation.add("name", NAME_TAKEN);
    }

    validation.into_result()?;

    let mut model = manufacturer.into_active_model();

    model.name = Set(request.name);
    model.country = Set(request.country);

    let manufacturer = model.update(db).await?;

    tracing::info!("Manufacturer updated");

    Ok(manufacturer.into())
}
