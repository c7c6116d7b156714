//! Review entity - a rated opinion about one product.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Unique identifier for the review
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Review text
    pub description: String,
    /// Non-negative rating
    pub rating: i32,
    /// ID of the reviewed product
    pub product_id: i64,
}

/// Defines relationships between Review and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each review belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
