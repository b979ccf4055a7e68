//! Planet database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Planet, PlanetId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub films_appeared_in: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Planet {
    fn from(model: Model) -> Self {
        Planet {
            id: PlanetId::from(model.id),
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
            films_appeared_in: u32::try_from(model.films_appeared_in).unwrap_or_default(),
        }
    }
}
