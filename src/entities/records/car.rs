//! Car entity - a catalogue car with a list price and a discounted price.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Car database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    /// Unique identifier for the car
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Car model name
    pub model: String,
    /// Production year
    pub year: i32,
    /// Paint colour
    pub color: String,
    /// List price
    pub price: f64,
    /// Price after the year-based discount has been applied
    pub price_with_discount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
