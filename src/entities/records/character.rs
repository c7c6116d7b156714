//! Character entity - a role-playing character with a class and combat stats.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class; `Fusion` is only produced by fusing two characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CharacterClass {
    /// Spell caster
    #[sea_orm(string_value = "Mage")]
    Mage,
    /// Melee fighter
    #[sea_orm(string_value = "Warrior")]
    Warrior,
    /// Stealth fighter
    #[sea_orm(string_value = "Assassin")]
    Assassin,
    /// Ranged fighter
    #[sea_orm(string_value = "Scout")]
    Scout,
    /// Result of fusing two characters
    #[sea_orm(string_value = "Fusion")]
    Fusion,
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

/// Character database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    /// Unique identifier for the character
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Character name
    pub name: String,
    /// Character class
    pub class_name: CharacterClass,
    /// Experience level
    pub level: i32,
    /// Strength stat
    pub strength: i32,
    /// Dexterity stat
    pub dexterity: i32,
    /// Intelligence stat
    pub intelligence: i32,
    /// Hit points
    pub hit_points: i32,
    /// Free-form inventory description
    #[sea_orm(column_type = "Text")]
    pub inventory: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
