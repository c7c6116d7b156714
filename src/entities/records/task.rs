//! Task entity - a titled piece of work with a due date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    /// Unique identifier for the task
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short title; not unique
    pub title: String,
    /// Free-form description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Day the task is due
    pub due_date: Date,
    /// Whether the task is done
    pub is_finished: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task - {} needs to be done until {}!",
            self.title, self.due_date
        )
    }
}
