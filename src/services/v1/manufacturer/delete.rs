use sea_orm::prelude::*;

use crate::entities::v1::manufacturers::{Entity, Model};
use crate::errors::Error;

#[tracing::instrument(skip(db))]
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), Error> {
    if Model::find_by_id(db, id).await?.is_none() {
        return Err(Error::not_found(format!("No manufacturer found matching id {id}")));
    }

    Entity::delete_by_id(id).exec(db).await?;

    tracing::info!("Manufacturer deleted");

    Ok(())
}
