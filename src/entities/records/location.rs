//! Location entity - a settlement within a region.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Location database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    /// Unique identifier for the location
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Location name (e.g., "Sofia")
    pub name: String,
    /// Region the location belongs to
    pub region: String,
    /// Number of inhabitants
    pub population: i32,
    /// Free-form description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Whether the location is a capital city
    pub is_capital: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has a population of {}!", self.name, self.population)
    }
}
