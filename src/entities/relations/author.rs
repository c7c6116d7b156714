//! Author entity - writes many books.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Author database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    /// Unique identifier for the author
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Author name
    pub name: String,
}

/// Defines relationships between Author and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One author has many books
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
