//! Owner entity - owns any number of registry cars.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Owner database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    /// Unique identifier for the owner
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owner name
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One owner has many cars
    #[sea_orm(has_many = "super::registry_car::Entity")]
    Cars,
}

impl Related<super::registry_car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cars.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
