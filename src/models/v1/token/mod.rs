use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;

use crate::entities::v1::drivers;
use crate::entities::v1::tokens::{Column, Entity, Model};
use crate::helpers::now;

impl Model {
    /// The unexpired session `id` and its active driver
    pub async fn driver(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<(Self, drivers::Model)>, DbErr> {
        let found = Entity::find_by_id(id)
            .filter(Column::ExpiredAt.gt(now()))
            .find_also_related(drivers::Entity)
            .one(db)
            .await?;

        Ok(match found {
            Some((token, Some(driver))) if driver.is_active => Some((token, driver)),
            _ => None,
        })
    }

    /// Count one more page visit, returning the new total
    pub async fn increment_visits(db: &DatabaseConnection, id: Uuid) -> Result<i32, DbErr> {
        Entity::update_many()
            .col_expr(Column::Visits, Expr::col(Column::Visits).add(1))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;

        let token = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Token {id} not found")))?;

        Ok(token.visits)
    }

    pub async fn revoke(db: &DatabaseConnection, id: Uuid) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;

        Ok(())
    }

    /// Delete every expired session, returning how many were removed
    pub async fn purge_expired(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::ExpiredAt.lte(now()))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    pub fn is_expired(&self) -> bool {
        self.expired_at <= now()
    }
}
