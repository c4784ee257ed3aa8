use sea_orm::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder, Select};

use crate::entities::v1::manufacturers::{ActiveModel, Column, Entity, Model};
use crate::responses::v1::manufacturer::Manufacturer;

impl Model {
    /// All manufacturers in their default order
    pub fn ordered() -> Select<Entity> {
        Entity::find().order_by_asc(Column::Id)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Whether another manufacturer already uses `name`
    pub async fn name_exists(
        db: &DatabaseConnection,
        name: &str,
        except: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = Entity::find().filter(Column::Name.eq(name));

        if let Some(id) = except {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.count(db).await? > 0)
    }

    pub async fn total(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn store(db: &DatabaseConnection, name: String, country: String) -> Result<Self, DbErr> {
        ActiveModel {
            name: Set(name),
            country: Set(country),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}

impl From<Model> for Manufacturer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country: model.country,
        }
    }
}

impl From<&Model> for Manufacturer {
    fn from(model: &Model) -> Self {
        Self::from(model.clone())
    }
}
