//! Pet entity - a named animal of some species.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pet database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    /// Unique identifier for the pet
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Pet name (e.g., "Buddy")
    pub name: String,
    /// Species (e.g., "Dog")
    pub species: String,
}

/// Pets have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
