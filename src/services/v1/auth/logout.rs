use sea_orm::DatabaseConnection;

use crate::entities::v1::tokens::Model;
use crate::errors::Error;
use crate::middlewares::v1::auth::{Auth, Authenticated as Cache};

#[tracing::instrument(skip(auth, db, cached), fields(driver_id = auth.driver.id, token_id = %auth.token))]
pub async fn logout(auth: &Auth, db: &DatabaseConnection, cached: &Cache) -> Result<(), Error> {
    Model::revoke(db, auth.token).await?;
    cached.remove(auth.token);

    tracing::info!("Logged out");

    Ok(())
}
