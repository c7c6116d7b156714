//! Driving license entity - issued to exactly one driver.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Driving license database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "driving_licenses")]
pub struct Model {
    /// Unique identifier for the license
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Printed license number, unique
    #[sea_orm(unique)]
    pub license_number: String,
    /// Day the license was issued
    pub issue_date: Date,
    /// License holder; a driver holds at most one license
    #[sea_orm(unique)]
    pub driver_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each license belongs to one driver
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::Id",
        on_delete = "Cascade"
    )]
    Driver,
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
