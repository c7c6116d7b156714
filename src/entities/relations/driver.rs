//! Driver entity - holds at most one driving license.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Driver database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    /// Unique identifier for the driver
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One driver has one license
    #[sea_orm(has_one = "super::driving_license::Entity")]
    License,
}

impl Related<super::driving_license::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::License.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
