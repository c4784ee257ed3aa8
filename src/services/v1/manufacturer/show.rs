use sea_orm::DatabaseConnection;

use crate::entities::v1::manufacturers::Model;
use crate::errors::Error;
use crate::responses::v1::manufacturer::Manufacturer;

pub async fn show(db: &DatabaseConnection, id: i32) -> Result<Manufacturer, Error> {
    Model::find_by_id(db, id)
        .await?
        .map(Manufacturer::from)
        .ok_or_else(|| Error::not_found(format!("No manufacturer found matching id {id}")))
}
