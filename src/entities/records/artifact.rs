//! Artifact entity - an object with an origin, an age and possibly magic.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Artifact database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artifacts")]
pub struct Model {
    /// Unique identifier for the artifact
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Artifact name
    pub name: String,
    /// Where the artifact was found
    pub origin: String,
    /// Age in years
    pub age: i32,
    /// Free-form description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Whether the artifact is magical
    pub is_magical: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
