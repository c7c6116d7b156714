//! Registration entity - a registration number, optionally assigned to a car.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Registration database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    /// Unique identifier for the registration
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Plate number, unique
    #[sea_orm(unique)]
    pub registration_number: String,
    /// Day the registration was assigned; empty while unassigned
    pub registration_date: Option<Date>,
    /// Registered car; a car carries at most one registration
    #[sea_orm(unique)]
    pub car_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each registration belongs to at most one car
    #[sea_orm(
        belongs_to = "super::registry_car::Entity",
        from = "Column::CarId",
        to = "super::registry_car::Column::Id",
        on_delete = "Cascade"
    )]
    Car,
}

impl Related<super::registry_car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
