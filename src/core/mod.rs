//! Core query operations - framework-agnostic functions over a `SeaORM` connection.
//!
//! `records` works on standalone tables; `relations` works on tables linked by
//! foreign keys. The two groups never call each other.

pub mod records;
pub mod relations;
