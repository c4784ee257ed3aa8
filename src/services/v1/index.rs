use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::entities::v1::{drivers, manufacturers, tokens};
use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub num_drivers: u64,
    pub num_manufacturers: u64,
    pub num_visits: i32,
}

/// Record counts for the home page, counting this visit to it
#[tracing::instrument(skip_all, fields(token_id = %auth.token))]
pub async fn index(db: &DatabaseConnection, auth: &Auth) -> Result<Summary, Error> {
    let num_visits = tokens::Model::increment_visits(db, auth.token).await?;

    Ok(Summary {
        num_drivers: drivers::Model::total(db).await?,
        num_manufacturers: manufacturers::Model::total(db).await?,
        num_visits,
    })
}
