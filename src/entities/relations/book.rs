//! Book entity - belongs to exactly one author and disappears with them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Book database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    /// Unique identifier for the book
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Book title
    pub title: String,
    /// Cover price
    pub price: f64,
    /// ID of the author who wrote the book
    pub author_id: i64,
}

/// Defines relationships between Book and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each book belongs to one author
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
