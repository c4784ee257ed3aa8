use sea_orm::DatabaseConnection;

use crate::entities::v1::manufacturers::Model;
use crate::errors::Error;
use crate::requests::v1::manufacturer::ManufacturerRequest;
use crate::responses::v1::manufacturer::Manufacturer;

use super::NAME_TAKEN;

#[tracing::instrument(skip(db, request), fields(name = %request.name))]
pub async fn store(
    db: &DatabaseConnection,
    request: ManufacturerRequest,
) -> Result<Manufacturer, Error> {
    let request = request.trimmed();
    let mut validation = request.validate();

    if !validation.has("name") && Model::name_exists(db, &request.name, None).await? {
        validation.add("name", NAME_TAKEN);
    }

    validation.into_result()?;

    let manufacturer = Model::store(db, request.name, request.country).await?;

    tracing::info!(id = manufacturer.id, "Manufacturer created");

    Ok(manufacturer.into())
}
