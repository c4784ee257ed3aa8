use std::time::Duration;

use sea_orm::prelude::*;
use sea_orm::{ActiveValue::Set, IntoActiveModel, QueryOrder, Select};

use crate::entities::v1::drivers::{Column, Entity, Model};
use crate::entities::v1::tokens;
use crate::helpers::now;
use crate::responses::v1::driver::Driver;

impl Model {
    pub fn ordered() -> Select<Entity> {
        Entity::find().order_by_asc(Column::Id)
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    pub async fn username_exists(db: &DatabaseConnection, username: &str) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Username.eq(username))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn license_number_exists(
        db: &DatabaseConnection,
        license_number: &str,
    ) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::LicenseNumber.eq(license_number))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn total(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    /// Open a new session for this driver
    pub async fn generate_token(
        &self,
        db: &DatabaseConnection,
        lifetime: Duration,
    ) -> Result<tokens::Model, DbErr> {
        let expired_at = chrono::Duration::from_std(lifetime)
            .ok()
            .and_then(|lifetime| now().checked_add_signed(lifetime))
            .ok_or_else(|| DbErr::Custom(format!("Invalid session lifetime: {lifetime:?}")))?;

        tokens::ActiveModel {
            id: Set(Uuid::new_v4()),
            driver_id: Set(self.id),
            visits: Set(0),
            expired_at: Set(expired_at),
        }
        .insert(db)
        .await
    }

    pub async fn touch_last_login(self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        let mut model = self.into_active_model();

        model.last_login = Set(Some(now()));
        model.update(db).await
    }

    /// Replace the stored password hash
    pub async fn set_password(self, db: &DatabaseConnection, hash: String) -> Result<Self, DbErr> {
        let mut model = self.into_active_model();

        model.password = Set(hash);
        model.update(db).await
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl From<&Model> for Driver {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            full_name: model.full_name(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            license_number: model.license_number.clone(),
        }
    }
}

impl From<Model> for Driver {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}
