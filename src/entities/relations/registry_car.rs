//! Registry car entity - a car that can be owned and registered.
//!
//! Kept apart from the catalogue car in `records::car`; the two never meet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Registry car database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registry_cars")]
pub struct Model {
    /// Unique identifier for the car
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Car model name
    pub model: String,
    /// Production year
    pub year: i32,
    /// Current owner, if any
    pub owner_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each car belongs to at most one owner
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    /// A car carries at most one registration
    #[sea_orm(has_one = "super::registration::Entity")]
    Registration,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
